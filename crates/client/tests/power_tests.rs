//! Power query tests.
//!
//! Drives the endpoint functions directly with a pinned `now` so the
//! `starttime`/`endtime` query parameters are deterministic, then checks
//! the public client methods attach a window at all.
//!
//! # Invariants
//! - Power URLs end in `?` before the query string, never `??`
//! - `endtime - starttime` equals the interval length

mod common;

use common::*;
use serde_json::json;

const NOW: i64 = 1_000_000;

#[tokio::test]
async fn test_datacenter_power_window() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/papillonserver/rest/datacenters/1/power"))
        .and(query_param("starttime", "996400"))
        .and(query_param("endtime", "1000000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"power": 1200})))
        .mount(&mock_server)
        .await;

    let http = Client::new();
    let value = endpoints::datacenter_power(
        &http,
        &base_url_for(&mock_server),
        "1",
        Interval::OneHour,
        NOW,
    )
    .await
    .unwrap();

    assert_eq!(value["power"], 1200);
}

#[tokio::test]
async fn test_floor_power_twelve_hour_window() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/papillonserver/rest/datacenters/1/floors/2/power"))
        .and(query_param("starttime", "956800"))
        .and(query_param("endtime", "1000000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"power": []})))
        .mount(&mock_server)
        .await;

    let http = Client::new();
    let result = endpoints::floor_power(
        &http,
        &base_url_for(&mock_server),
        "1",
        "2",
        Interval::TwelveHours,
        NOW,
    )
    .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_rack_power_twenty_four_hour_window() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/papillonserver/rest/datacenters/1/floors/2/racks/3/power"))
        .and(query_param("starttime", "913600"))
        .and(query_param("endtime", "1000000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"power": []})))
        .mount(&mock_server)
        .await;

    let http = Client::new();
    let result = endpoints::rack_power(
        &http,
        &base_url_for(&mock_server),
        "1",
        "2",
        "3",
        Interval::TwentyFourHours,
        NOW,
    )
    .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_host_power_full_identifier_chain() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(
            "/papillonserver/rest/datacenters/1/floors/2/racks/3/hosts/4/power",
        ))
        .and(query_param("starttime", "996400"))
        .and(query_param("endtime", "1000000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"power": 75})))
        .mount(&mock_server)
        .await;

    let http = Client::new();
    let value = endpoints::host_power(
        &http,
        &base_url_for(&mock_server),
        "1",
        "2",
        "3",
        "4",
        Interval::OneHour,
        NOW,
    )
    .await
    .unwrap();

    assert_eq!(value["power"], 75);
}

#[tokio::test]
async fn test_client_power_method_sends_a_window() {
    let mock_server = MockServer::start().await;

    // The client captures wall-clock now, so only assert the params exist.
    Mock::given(method("GET"))
        .and(path("/papillonserver/rest/datacenters/5/power"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"power": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client
        .datacenter_power("5", Interval::default())
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let url = &requests[0].url;
    let params: Vec<String> = url.query_pairs().map(|(k, _)| k.into_owned()).collect();
    assert!(params.contains(&"starttime".to_string()));
    assert!(params.contains(&"endtime".to_string()));
    assert_eq!(url.as_str().matches('?').count(), 1);
}
