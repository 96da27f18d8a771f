//! Single-shot JSON GET helper.
//!
//! This module performs the one HTTP call every endpoint function reduces
//! to: build the final request URL, issue a GET, classify the outcome, and
//! parse the body as JSON. A failed call is always surfaced as a typed
//! error; a remote `null` body is a legitimate `Ok(Value::Null)` and never
//! conflated with a transport failure.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Default request timeout, matching the client-wide default.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(4);

/// Per-request overrides applied on top of the client defaults.
///
/// Caller-supplied values win over the defaults installed at client build
/// time.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Override the request timeout.
    pub timeout: Option<Duration>,
    /// Extra headers; a name listed here replaces the default of the same name.
    pub headers: Vec<(String, String)>,
}

/// Build the final request URL from a resolved endpoint and query pairs.
///
/// The power templates already end in `?`; every other URL gets one
/// appended. Query pairs are form-urlencoded and appended directly, so the
/// result never carries a duplicated `?`. With no pairs the URL ends in a
/// single trailing `?`.
pub fn build_url(url: &str, query: &[(String, String)]) -> String {
    let mut out = String::with_capacity(url.len() + 32);
    out.push_str(url);
    if !out.contains('?') {
        out.push('?');
    }
    if !query.is_empty() {
        let encoded = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .finish();
        out.push_str(&encoded);
    }
    out
}

/// Issue a GET against a fully resolved URL and parse the JSON body.
pub async fn get_json(
    http: &Client,
    url: &str,
    query: &[(String, String)],
    options: Option<&RequestOptions>,
) -> Result<serde_json::Value> {
    let request_url = build_url(url, query);
    debug!(url = %request_url, "GET");

    let timeout = options
        .and_then(|o| o.timeout)
        .unwrap_or(DEFAULT_TIMEOUT);

    let mut builder = http.get(&request_url);
    if let Some(opts) = options {
        if let Some(t) = opts.timeout {
            builder = builder.timeout(t);
        }
        for (name, value) in &opts.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
    }

    let response = builder.send().await.map_err(|e| {
        if e.is_timeout() {
            ClientError::Timeout(timeout)
        } else {
            ClientError::Transport {
                url: request_url.clone(),
                source: e,
            }
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "could not read error response body".to_string());
        return Err(ClientError::ApiError {
            status: status.as_u16(),
            url: request_url,
            message,
        });
    }

    let body = response.text().await.map_err(|e| ClientError::Transport {
        url: request_url.clone(),
        source: e,
    })?;

    serde_json::from_str(&body).map_err(|e| ClientError::MalformedResponse {
        url: request_url,
        source: e,
    })
}
