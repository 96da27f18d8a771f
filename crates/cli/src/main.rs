//! Papillon CLI - query the Papillon datacenter power API.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Execute Papillon REST API commands via the shared client library.
//! - Render results as JSON.
//!
//! Does NOT handle:
//! - REST API implementation (see `crates/client`).
//! - Master address persistence internals (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide
//!   clap env defaults.
//! - Configuration precedence: CLI flags / env vars over the persisted
//!   master file.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use args::{Cli, Commands};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use papillon_config::ConfigLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    // set-master only writes the config source; everything else needs a
    // resolved master address.
    let needs_real_config = !matches!(cli.command, Commands::SetMaster { .. });

    let config = if needs_real_config {
        let mut loader = ConfigLoader::new();

        if let Some(ref path) = cli.master_file {
            loader = loader.with_master_file(path.clone());
        }
        if let Some(ref addr) = cli.master_addr {
            loader = loader.with_master_addr(addr.clone());
        }
        if let Some(secs) = cli.timeout {
            loader = loader.with_timeout(std::time::Duration::from_secs(secs));
        }

        loader = match loader.from_env() {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Failed to load configuration from environment: {:#}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        };

        loader = match loader.from_master_file() {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Failed to read persisted master address: {:#}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        };

        match loader.build() {
            Ok(c) => Some(c),
            Err(e) => {
                eprintln!("{:#}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        }
    } else {
        None
    };

    let exit_code = match run_command(cli, config).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
