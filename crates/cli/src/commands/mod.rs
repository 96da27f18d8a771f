//! Command implementations.

pub mod config;
pub mod power;
pub mod topology;

use anyhow::Result;
use papillon_client::PapillonClient;

/// Build a client from the resolved configuration.
pub(crate) fn build_client_from_config(
    config: &papillon_config::Config,
) -> Result<PapillonClient> {
    Ok(PapillonClient::from_config(config)?)
}
