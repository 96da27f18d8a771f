//! Configuration types.

use std::time::Duration;

use crate::constants::{DEFAULT_BASE_PATH, DEFAULT_TIMEOUT_SECS};

/// Resolved client configuration.
///
/// Immutable once built; construct through [`crate::ConfigLoader`] or
/// [`Config::new`] for the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Master address, scheme optional (e.g. `10.0.0.4:8080`).
    pub master_addr: String,
    /// REST base path appended to the master address.
    pub base_path: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Config {
    /// Create a configuration with the default base path and timeout.
    pub fn new(master_addr: impl Into<String>) -> Self {
        Self {
            master_addr: master_addr.into(),
            base_path: DEFAULT_BASE_PATH.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
