//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not handle config loading (see `main()`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "papillon-cli")]
#[command(about = "Papillon CLI - Query datacenter power telemetry from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  papillon-cli set-master 10.0.0.4:8080\n  papillon-cli datacenters\n  papillon-cli floors 1\n  papillon-cli hosts 1 2 3\n  papillon-cli power rack 1 2 3 --interval 12h\n"
)]
pub struct Cli {
    /// Address of the Papillon master (e.g. 10.0.0.4:8080)
    #[arg(short, long, global = true, env = "PAPILLON_MASTER_ADDR")]
    pub master_addr: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "PAPILLON_TIMEOUT_SECS")]
    pub timeout: Option<u64>,

    /// Path to the persisted master-address file (overrides default location)
    #[arg(long, global = true, env = "PAPILLON_MASTER_FILE", value_name = "FILE")]
    pub master_file: Option<PathBuf>,

    /// Output format (json, pretty)
    #[arg(short, long, global = true, default_value = "pretty")]
    pub output: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Persist the master address for future invocations
    SetMaster {
        /// Master address, host with optional port (e.g. 10.0.0.4:8080)
        addr: String,
    },

    /// List all datacenters reporting to the master
    Datacenters,

    /// List the floors of a datacenter
    Floors {
        /// Datacenter identifier
        datacenter: String,
    },

    /// List the racks on a floor
    Racks {
        /// Datacenter identifier
        datacenter: String,

        /// Floor identifier
        floor: String,
    },

    /// List the hosts in a rack
    Hosts {
        /// Datacenter identifier
        datacenter: String,

        /// Floor identifier
        floor: String,

        /// Rack identifier
        rack: String,
    },

    /// Query power usage for a topology node
    Power {
        #[command(subcommand)]
        target: PowerTarget,
    },
}

#[derive(Subcommand)]
pub enum PowerTarget {
    /// Power usage for a whole datacenter
    Datacenter {
        /// Datacenter identifier
        datacenter: String,

        /// Look-back window (1h, 12h, 24h, or interval code 0/1/2)
        #[arg(short, long, default_value = "1h")]
        interval: String,
    },

    /// Power usage for a floor
    Floor {
        /// Datacenter identifier
        datacenter: String,

        /// Floor identifier
        floor: String,

        /// Look-back window (1h, 12h, 24h, or interval code 0/1/2)
        #[arg(short, long, default_value = "1h")]
        interval: String,
    },

    /// Power usage for a rack
    Rack {
        /// Datacenter identifier
        datacenter: String,

        /// Floor identifier
        floor: String,

        /// Rack identifier
        rack: String,

        /// Look-back window (1h, 12h, 24h, or interval code 0/1/2)
        #[arg(short, long, default_value = "1h")]
        interval: String,
    },

    /// Power usage for a single host
    Host {
        /// Datacenter identifier
        datacenter: String,

        /// Floor identifier
        floor: String,

        /// Rack identifier
        rack: String,

        /// Host identifier
        host: String,

        /// Look-back window (1h, 12h, 24h, or interval code 0/1/2)
        #[arg(short, long, default_value = "1h")]
        interval: String,
    },
}
