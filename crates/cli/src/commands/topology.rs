//! Topology listing commands.

use anyhow::Result;
use tracing::info;

use crate::formatters;

pub async fn datacenters(config: papillon_config::Config, output: &str) -> Result<()> {
    let client = crate::commands::build_client_from_config(&config)?;
    info!("Listing datacenters from {}", client.base_url());

    let value = client.list_datacenters().await?;
    formatters::emit(&value, output)
}

pub async fn floors(
    config: papillon_config::Config,
    datacenter: &str,
    output: &str,
) -> Result<()> {
    let client = crate::commands::build_client_from_config(&config)?;
    info!("Listing floors of datacenter {}", datacenter);

    let value = client.list_floors(datacenter).await?;
    formatters::emit(&value, output)
}

pub async fn racks(
    config: papillon_config::Config,
    datacenter: &str,
    floor: &str,
    output: &str,
) -> Result<()> {
    let client = crate::commands::build_client_from_config(&config)?;
    info!("Listing racks on floor {} of datacenter {}", floor, datacenter);

    let value = client.list_racks(datacenter, floor).await?;
    formatters::emit(&value, output)
}

pub async fn hosts(
    config: papillon_config::Config,
    datacenter: &str,
    floor: &str,
    rack: &str,
    output: &str,
) -> Result<()> {
    let client = crate::commands::build_client_from_config(&config)?;
    info!("Listing hosts in rack {} of datacenter {}", rack, datacenter);

    let value = client.list_hosts(datacenter, floor, rack).await?;
    formatters::emit(&value, output)
}
