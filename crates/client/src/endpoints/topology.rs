//! Topology listing endpoints.

use reqwest::Client;
use serde_json::Value;

use crate::endpoints::request::get_json;
use crate::endpoints::templates::{PathParams, resolve_url};
use crate::error::Result;

/// List all datacenters reporting to the Papillon master.
pub async fn list_datacenters(client: &Client, base_url: &str) -> Result<Value> {
    let url = resolve_url(base_url, "datacenters", &PathParams::new())?;
    get_json(client, &url, &[], None).await
}

/// List all floors of a datacenter.
pub async fn list_floors(client: &Client, base_url: &str, datacenter_id: &str) -> Result<Value> {
    let url = resolve_url(
        base_url,
        "floors",
        &PathParams::new().datacenter(datacenter_id),
    )?;
    get_json(client, &url, &[], None).await
}

/// List all racks on a floor of a datacenter.
pub async fn list_racks(
    client: &Client,
    base_url: &str,
    datacenter_id: &str,
    floor_id: &str,
) -> Result<Value> {
    let url = resolve_url(
        base_url,
        "racks",
        &PathParams::new().datacenter(datacenter_id).floor(floor_id),
    )?;
    get_json(client, &url, &[], None).await
}

/// List all hosts in a rack.
pub async fn list_hosts(
    client: &Client,
    base_url: &str,
    datacenter_id: &str,
    floor_id: &str,
    rack_id: &str,
) -> Result<Value> {
    let url = resolve_url(
        base_url,
        "hosts",
        &PathParams::new()
            .datacenter(datacenter_id)
            .floor(floor_id)
            .rack(rack_id),
    )?;
    get_json(client, &url, &[], None).await
}
