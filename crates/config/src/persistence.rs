//! Persisted master-address file.
//!
//! Responsibilities:
//! - Determine the platform path of the master-address file via the
//!   `directories` crate.
//! - Read and write the file (`set-master` writes it, the loader reads it).
//!
//! Does NOT handle:
//! - Precedence against environment variables (see `loader.rs`).
//!
//! Invariants:
//! - The stored address is a single line; surrounding whitespace is trimmed
//!   on read and a trailing newline is written.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::constants::MASTER_FILE_NAME;
use crate::loader::ConfigError;

/// Returns the default path of the persisted master-address file.
///
/// - Linux/macOS: `~/.config/papillon/master`
/// - Windows: `%AppData%\papillon\master`
pub fn default_master_file_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = directories::ProjectDirs::from("", "", "papillon").ok_or_else(|| {
        ConfigError::ConfigDirUnavailable("no home directory available".to_string())
    })?;

    Ok(proj_dirs.config_dir().join(MASTER_FILE_NAME))
}

/// Read the persisted master address.
pub fn read_master_file(path: &Path) -> Result<String, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::MasterFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "loaded master address");
    Ok(raw.trim().to_string())
}

/// Persist the master address, creating parent directories as needed.
pub fn write_master_file(path: &Path, addr: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, format!("{}\n", addr.trim()))?;
    debug!(path = %path.display(), "wrote master address");
    Ok(())
}
