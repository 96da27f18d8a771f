//! Power query commands.

use anyhow::Result;
use papillon_client::Interval;
use tracing::info;

use crate::formatters;

pub async fn datacenter(
    config: papillon_config::Config,
    datacenter: &str,
    interval: &str,
    output: &str,
) -> Result<()> {
    let interval: Interval = interval.parse()?;
    let client = crate::commands::build_client_from_config(&config)?;
    info!(
        "Querying {} power for datacenter {}",
        interval, datacenter
    );

    let value = client.datacenter_power(datacenter, interval).await?;
    formatters::emit(&value, output)
}

pub async fn floor(
    config: papillon_config::Config,
    datacenter: &str,
    floor: &str,
    interval: &str,
    output: &str,
) -> Result<()> {
    let interval: Interval = interval.parse()?;
    let client = crate::commands::build_client_from_config(&config)?;
    info!(
        "Querying {} power for floor {} of datacenter {}",
        interval, floor, datacenter
    );

    let value = client.floor_power(datacenter, floor, interval).await?;
    formatters::emit(&value, output)
}

pub async fn rack(
    config: papillon_config::Config,
    datacenter: &str,
    floor: &str,
    rack: &str,
    interval: &str,
    output: &str,
) -> Result<()> {
    let interval: Interval = interval.parse()?;
    let client = crate::commands::build_client_from_config(&config)?;
    info!(
        "Querying {} power for rack {} of datacenter {}",
        interval, rack, datacenter
    );

    let value = client.rack_power(datacenter, floor, rack, interval).await?;
    formatters::emit(&value, output)
}

pub async fn host(
    config: papillon_config::Config,
    datacenter: &str,
    floor: &str,
    rack: &str,
    host: &str,
    interval: &str,
    output: &str,
) -> Result<()> {
    let interval: Interval = interval.parse()?;
    let client = crate::commands::build_client_from_config(&config)?;
    info!(
        "Querying {} power for host {} of datacenter {}",
        interval, host, datacenter
    );

    let value = client
        .host_power(datacenter, floor, rack, host, interval)
        .await?;
    formatters::emit(&value, output)
}
