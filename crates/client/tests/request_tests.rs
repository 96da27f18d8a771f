//! Request helper tests.
//!
//! Exercises `get_json` directly: per-request option overrides and the
//! timeout path. URL construction rules are unit-tested next to the
//! helper itself.

mod common;

use std::time::Duration;

use common::*;
use papillon_client::RequestOptions;
use serde_json::json;

#[tokio::test]
async fn test_request_options_header_overrides_client_default() {
    let mock_server = MockServer::start().await;

    // Only a request carrying the overridden Accept header matches.
    Mock::given(method("GET"))
        .and(path("/papillonserver/rest/datacenters/"))
        .and(header("Accept", "application/xml"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let mut defaults = reqwest::header::HeaderMap::new();
    defaults.insert(
        reqwest::header::ACCEPT,
        reqwest::header::HeaderValue::from_static("application/json"),
    );
    let http = reqwest::Client::builder()
        .default_headers(defaults)
        .build()
        .unwrap();

    let options = RequestOptions {
        headers: vec![("Accept".to_string(), "application/xml".to_string())],
        ..Default::default()
    };

    let value = endpoints::get_json(
        &http,
        &format!("{}datacenters/", base_url_for(&mock_server)),
        &[],
        Some(&options),
    )
    .await
    .unwrap();

    assert_eq!(value, json!([]));
}

#[tokio::test]
async fn test_request_options_timeout_override() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/papillonserver/rest/datacenters/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let http = Client::new();
    let options = RequestOptions {
        timeout: Some(Duration::from_millis(50)),
        ..Default::default()
    };

    let err = endpoints::get_json(
        &http,
        &format!("{}datacenters/", base_url_for(&mock_server)),
        &[],
        Some(&options),
    )
    .await
    .unwrap_err();

    assert!(
        matches!(err, ClientError::Timeout(t) if t == Duration::from_millis(50)),
        "Expected Timeout, got {:?}",
        err
    );
}
