//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).
//!
//! Invariants:
//! - `set-master` is the only command that runs without a resolved config;
//!   `main()` passes `None` exactly for it.

use anyhow::{Result, anyhow};

use crate::args::{Cli, Commands, PowerTarget};
use crate::commands;

fn require(config: Option<papillon_config::Config>) -> Result<papillon_config::Config> {
    config.ok_or_else(|| anyhow!("Master address is not configured"))
}

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(cli: Cli, config: Option<papillon_config::Config>) -> Result<()> {
    match cli.command {
        Commands::SetMaster { ref addr } => {
            commands::config::set_master(addr, cli.master_file.clone())
        }
        Commands::Datacenters => {
            commands::topology::datacenters(require(config)?, &cli.output).await
        }
        Commands::Floors { ref datacenter } => {
            commands::topology::floors(require(config)?, datacenter, &cli.output).await
        }
        Commands::Racks {
            ref datacenter,
            ref floor,
        } => commands::topology::racks(require(config)?, datacenter, floor, &cli.output).await,
        Commands::Hosts {
            ref datacenter,
            ref floor,
            ref rack,
        } => {
            commands::topology::hosts(require(config)?, datacenter, floor, rack, &cli.output).await
        }
        Commands::Power { ref target } => match target {
            PowerTarget::Datacenter {
                datacenter,
                interval,
            } => commands::power::datacenter(require(config)?, datacenter, interval, &cli.output)
                .await,
            PowerTarget::Floor {
                datacenter,
                floor,
                interval,
            } => {
                commands::power::floor(require(config)?, datacenter, floor, interval, &cli.output)
                    .await
            }
            PowerTarget::Rack {
                datacenter,
                floor,
                rack,
                interval,
            } => {
                commands::power::rack(
                    require(config)?,
                    datacenter,
                    floor,
                    rack,
                    interval,
                    &cli.output,
                )
                .await
            }
            PowerTarget::Host {
                datacenter,
                floor,
                rack,
                host,
                interval,
            } => {
                commands::power::host(
                    require(config)?,
                    datacenter,
                    floor,
                    rack,
                    host,
                    interval,
                    &cli.output,
                )
                .await
            }
        },
    }
}
