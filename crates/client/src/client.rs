//! Main Papillon REST API client.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;

use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::interval::Interval;

/// Fixed REST base path on the Papillon master.
pub const BASE_PATH: &str = "/papillonserver/rest/";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(4);

/// Builder for creating a new PapillonClient.
pub struct PapillonClientBuilder {
    master_addr: Option<String>,
    base_path: String,
    timeout: Duration,
}

impl Default for PapillonClientBuilder {
    fn default() -> Self {
        Self {
            master_addr: None,
            base_path: BASE_PATH.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl PapillonClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the address of the Papillon master (e.g. `10.0.0.4:8080`).
    pub fn master_addr(mut self, addr: String) -> Self {
        self.master_addr = Some(addr);
        self
    }

    /// Set the REST base path appended to the master address.
    pub fn base_path(mut self, path: String) -> Self {
        self.base_path = path;
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Normalize a master address into a scheme-qualified URL with no
    /// trailing slash.
    ///
    /// The master is usually configured as a bare `host:port`; an `http://`
    /// scheme is assumed in that case. Examples:
    /// - "10.0.0.4:8080" -> "http://10.0.0.4:8080"
    /// - "http://master:8080/" -> "http://master:8080"
    fn normalize_master_addr(addr: &str) -> String {
        let trimmed = addr.trim().trim_end_matches('/');
        if trimmed.contains("://") {
            trimmed.to_string()
        } else {
            format!("http://{}", trimmed)
        }
    }

    /// Build the client.
    pub fn build(self) -> Result<PapillonClient> {
        let master_addr = self
            .master_addr
            .filter(|a| !a.trim().is_empty())
            .ok_or_else(|| ClientError::InvalidUrl("master address is required".to_string()))?;
        let master_addr = Self::normalize_master_addr(&master_addr);

        url::Url::parse(&master_addr)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", master_addr, e)))?;

        let base_url = format!("{}{}", master_addr, self.base_path);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .default_headers(headers)
            .build()?;

        Ok(PapillonClient { http, base_url })
    }
}

/// Papillon REST API client.
///
/// Provides the topology listings and power queries exposed by the Papillon
/// master. Responses come back as raw JSON; the API's schema is opaque to
/// this client and not validated.
#[derive(Debug, Clone)]
pub struct PapillonClient {
    http: reqwest::Client,
    base_url: String,
}

impl PapillonClient {
    /// Create a new client builder.
    pub fn builder() -> PapillonClientBuilder {
        PapillonClientBuilder::new()
    }

    /// Build a client from a resolved configuration.
    pub fn from_config(config: &papillon_config::Config) -> Result<Self> {
        PapillonClientBuilder::new()
            .master_addr(config.master_addr.clone())
            .base_path(config.base_path.clone())
            .timeout(config.timeout)
            .build()
    }

    /// List all datacenters reporting to the master.
    pub async fn list_datacenters(&self) -> Result<Value> {
        endpoints::list_datacenters(&self.http, &self.base_url).await
    }

    /// List all floors of a datacenter.
    pub async fn list_floors(&self, datacenter_id: &str) -> Result<Value> {
        endpoints::list_floors(&self.http, &self.base_url, datacenter_id).await
    }

    /// List all racks on a floor.
    pub async fn list_racks(&self, datacenter_id: &str, floor_id: &str) -> Result<Value> {
        endpoints::list_racks(&self.http, &self.base_url, datacenter_id, floor_id).await
    }

    /// List all hosts in a rack.
    pub async fn list_hosts(
        &self,
        datacenter_id: &str,
        floor_id: &str,
        rack_id: &str,
    ) -> Result<Value> {
        endpoints::list_hosts(&self.http, &self.base_url, datacenter_id, floor_id, rack_id).await
    }

    /// Power usage for a datacenter over the given look-back window.
    pub async fn datacenter_power(&self, datacenter_id: &str, interval: Interval) -> Result<Value> {
        endpoints::datacenter_power(&self.http, &self.base_url, datacenter_id, interval, now())
            .await
    }

    /// Power usage for a floor over the given look-back window.
    pub async fn floor_power(
        &self,
        datacenter_id: &str,
        floor_id: &str,
        interval: Interval,
    ) -> Result<Value> {
        endpoints::floor_power(
            &self.http,
            &self.base_url,
            datacenter_id,
            floor_id,
            interval,
            now(),
        )
        .await
    }

    /// Power usage for a rack over the given look-back window.
    pub async fn rack_power(
        &self,
        datacenter_id: &str,
        floor_id: &str,
        rack_id: &str,
        interval: Interval,
    ) -> Result<Value> {
        endpoints::rack_power(
            &self.http,
            &self.base_url,
            datacenter_id,
            floor_id,
            rack_id,
            interval,
            now(),
        )
        .await
    }

    /// Power usage for a single host over the given look-back window.
    pub async fn host_power(
        &self,
        datacenter_id: &str,
        floor_id: &str,
        rack_id: &str,
        host_id: &str,
        interval: Interval,
    ) -> Result<Value> {
        endpoints::host_power(
            &self.http,
            &self.base_url,
            datacenter_id,
            floor_id,
            rack_id,
            host_id,
            interval,
            now(),
        )
        .await
    }

    /// Get the fully resolved base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Wall-clock now as Unix seconds; every power window ends here.
fn now() -> i64 {
    chrono::Utc::now().timestamp()
}
