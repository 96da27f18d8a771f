//! Configuration loader for environment variables and the master file.
//!
//! Responsibilities:
//! - Load configuration from `.env` files, environment variables, and the
//!   persisted master-address file.
//! - Provide a builder-pattern `ConfigLoader` with documented precedence.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv
//!   loading in tests.
//!
//! Does NOT handle:
//! - Persisting the master address back to disk (see `persistence.rs`).
//!
//! Invariants / Assumptions:
//! - Explicit setters take precedence over environment variables, which
//!   take precedence over the master file.
//! - `load_dotenv()` must be called explicitly to enable `.env` loading.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::constants::{ENV_MASTER_ADDR, ENV_MASTER_FILE, ENV_TIMEOUT_SECS};
use crate::persistence::{default_master_file_path, read_master_file};
use crate::types::Config;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "Master address is required (set PAPILLON_MASTER_ADDR or run `papillon-cli set-master <addr>`)"
    )]
    MissingMasterAddr,

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Unable to determine config directory: {0}")]
    ConfigDirUnavailable(String),

    #[error("Failed to read master file at {path}")]
    MasterFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read an environment variable, treating unset or blank as `None`.
pub fn env_var_or_none(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Configuration loader that builds a [`Config`] from explicit values,
/// environment variables, and the persisted master-address file.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    master_addr: Option<String>,
    timeout: Option<Duration>,
    master_file: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// If the `DOTENV_DISABLED` environment variable is set to "true" or
    /// "1", the `.env` file will not be loaded (useful for testing).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if std::env::var("DOTENV_DISABLED").ok().as_deref() != Some("true")
            && std::env::var("DOTENV_DISABLED").ok().as_deref() != Some("1")
        {
            dotenvy::dotenv().ok();
        }
        Ok(self)
    }

    /// Apply environment variables. Values already set on the loader win.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        if self.master_addr.is_none() {
            self.master_addr = env_var_or_none(ENV_MASTER_ADDR);
        }

        if self.timeout.is_none()
            && let Some(raw) = env_var_or_none(ENV_TIMEOUT_SECS)
        {
            let secs: u64 = raw.parse().map_err(|_| ConfigError::InvalidValue {
                var: ENV_TIMEOUT_SECS.to_string(),
                message: format!("expected whole seconds, got '{}'", raw),
            })?;
            self.timeout = Some(Duration::from_secs(secs));
        }

        if self.master_file.is_none() {
            self.master_file = env_var_or_none(ENV_MASTER_FILE).map(PathBuf::from);
        }

        Ok(self)
    }

    /// Fill the master address from the persisted file when nothing else
    /// supplied one. A missing file is not an error at this stage; `build`
    /// reports the absence.
    pub fn from_master_file(mut self) -> Result<Self, ConfigError> {
        if self.master_addr.is_some() {
            return Ok(self);
        }

        let path = match self.master_file.clone() {
            Some(path) => path,
            None => default_master_file_path()?,
        };

        if path.exists() {
            self.master_addr = Some(read_master_file(&path)?);
        }

        Ok(self)
    }

    /// Set the master address explicitly.
    pub fn with_master_addr(mut self, addr: String) -> Self {
        self.master_addr = Some(addr);
        self
    }

    /// Set the request timeout explicitly.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the master-address file path explicitly.
    pub fn with_master_file(mut self, path: PathBuf) -> Self {
        self.master_file = Some(path);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let master_addr = self
            .master_addr
            .filter(|a| !a.trim().is_empty())
            .ok_or(ConfigError::MissingMasterAddr)?;

        // Validate early; the client builder applies the same scheme default.
        let probe = if master_addr.contains("://") {
            master_addr.clone()
        } else {
            format!("http://{}", master_addr)
        };
        url::Url::parse(&probe).map_err(|e| ConfigError::InvalidValue {
            var: ENV_MASTER_ADDR.to_string(),
            message: format!("'{}' is not a valid address: {}", master_addr, e),
        })?;

        let mut config = Config::new(master_addr);
        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_build_requires_master_addr() {
        let err = ConfigLoader::new().build().unwrap_err();
        assert!(matches!(err, ConfigError::MissingMasterAddr));
    }

    #[test]
    fn test_build_rejects_blank_master_addr() {
        let err = ConfigLoader::new()
            .with_master_addr("   ".to_string())
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingMasterAddr));
    }

    #[test]
    fn test_build_rejects_garbage_master_addr() {
        let err = ConfigLoader::new()
            .with_master_addr("http://".to_string())
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_explicit_values_build() {
        let config = ConfigLoader::new()
            .with_master_addr("10.0.0.4:8080".to_string())
            .with_timeout(Duration::from_secs(10))
            .build()
            .unwrap();

        assert_eq!(config.master_addr, "10.0.0.4:8080");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    #[serial]
    fn test_from_env_reads_variables() {
        temp_env::with_vars(
            [
                (ENV_MASTER_ADDR, Some("192.168.0.9:8080")),
                (ENV_TIMEOUT_SECS, Some("7")),
            ],
            || {
                let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
                assert_eq!(config.master_addr, "192.168.0.9:8080");
                assert_eq!(config.timeout, Duration::from_secs(7));
            },
        );
    }

    #[test]
    #[serial]
    fn test_explicit_setter_wins_over_env() {
        temp_env::with_var(ENV_MASTER_ADDR, Some("from-env:8080"), || {
            let config = ConfigLoader::new()
                .with_master_addr("explicit:8080".to_string())
                .from_env()
                .unwrap()
                .build()
                .unwrap();
            assert_eq!(config.master_addr, "explicit:8080");
        });
    }

    #[test]
    #[serial]
    fn test_invalid_timeout_env_is_rejected() {
        temp_env::with_var(ENV_TIMEOUT_SECS, Some("soon"), || {
            let err = ConfigLoader::new().from_env().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { .. }));
        });
    }

    #[test]
    #[serial]
    fn test_env_wins_over_master_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("master");
        crate::persistence::write_master_file(&path, "from-file:8080").unwrap();

        temp_env::with_var(ENV_MASTER_ADDR, Some("from-env:8080"), || {
            let config = ConfigLoader::new()
                .with_master_file(path.clone())
                .from_env()
                .unwrap()
                .from_master_file()
                .unwrap()
                .build()
                .unwrap();
            assert_eq!(config.master_addr, "from-env:8080");
        });
    }

    #[test]
    #[serial]
    fn test_master_file_fills_when_env_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("master");
        crate::persistence::write_master_file(&path, "from-file:8080").unwrap();

        temp_env::with_var(ENV_MASTER_ADDR, None::<&str>, || {
            let config = ConfigLoader::new()
                .with_master_file(path.clone())
                .from_env()
                .unwrap()
                .from_master_file()
                .unwrap()
                .build()
                .unwrap();
            assert_eq!(config.master_addr, "from-file:8080");
        });
    }

    #[test]
    fn test_missing_master_file_is_not_an_error_until_build() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ConfigLoader::new()
            .with_master_file(dir.path().join("absent"))
            .from_master_file()
            .unwrap();

        assert!(matches!(
            loader.build().unwrap_err(),
            ConfigError::MissingMasterAddr
        ));
    }
}
