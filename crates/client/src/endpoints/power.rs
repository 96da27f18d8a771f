//! Power telemetry endpoints.
//!
//! Each query carries a `starttime`/`endtime` pair in Unix seconds. The
//! window always ends at `now`; callers of the public client never supply
//! `endtime` themselves.

use reqwest::Client;
use serde_json::Value;

use crate::endpoints::request::get_json;
use crate::endpoints::templates::{PathParams, resolve_url};
use crate::error::Result;
use crate::interval::Interval;

fn time_range(interval: Interval, now: i64) -> Vec<(String, String)> {
    let (start, end) = interval.window(now);
    vec![
        ("starttime".to_string(), start.to_string()),
        ("endtime".to_string(), end.to_string()),
    ]
}

/// Power usage for every host in a datacenter over the interval window.
pub async fn datacenter_power(
    client: &Client,
    base_url: &str,
    datacenter_id: &str,
    interval: Interval,
    now: i64,
) -> Result<Value> {
    let url = resolve_url(
        base_url,
        "datacenter-power",
        &PathParams::new().datacenter(datacenter_id),
    )?;
    get_json(client, &url, &time_range(interval, now), None).await
}

/// Power usage for every host on a floor over the interval window.
pub async fn floor_power(
    client: &Client,
    base_url: &str,
    datacenter_id: &str,
    floor_id: &str,
    interval: Interval,
    now: i64,
) -> Result<Value> {
    let url = resolve_url(
        base_url,
        "floor-power",
        &PathParams::new().datacenter(datacenter_id).floor(floor_id),
    )?;
    get_json(client, &url, &time_range(interval, now), None).await
}

/// Power usage for every host in a rack over the interval window.
pub async fn rack_power(
    client: &Client,
    base_url: &str,
    datacenter_id: &str,
    floor_id: &str,
    rack_id: &str,
    interval: Interval,
    now: i64,
) -> Result<Value> {
    let url = resolve_url(
        base_url,
        "rack-power",
        &PathParams::new()
            .datacenter(datacenter_id)
            .floor(floor_id)
            .rack(rack_id),
    )?;
    get_json(client, &url, &time_range(interval, now), None).await
}

/// Power usage for a single host over the interval window.
pub async fn host_power(
    client: &Client,
    base_url: &str,
    datacenter_id: &str,
    floor_id: &str,
    rack_id: &str,
    host_id: &str,
    interval: Interval,
    now: i64,
) -> Result<Value> {
    let url = resolve_url(
        base_url,
        "host-power",
        &PathParams::new()
            .datacenter(datacenter_id)
            .floor(floor_id)
            .rack(rack_id)
            .host(host_id),
    )?;
    get_json(client, &url, &time_range(interval, now), None).await
}
