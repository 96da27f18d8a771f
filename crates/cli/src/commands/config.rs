//! Master-address bootstrap command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use papillon_config::{default_master_file_path, write_master_file};

/// Persist the master address for future invocations.
pub fn set_master(addr: &str, master_file: Option<PathBuf>) -> Result<()> {
    let path = match master_file {
        Some(path) => path,
        None => default_master_file_path().context("Failed to resolve master file location")?,
    };

    write_master_file(&path, addr)
        .with_context(|| format!("Failed to write master address to {}", path.display()))?;

    println!("Master address {} written to {}", addr, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use papillon_config::read_master_file;

    #[test]
    fn test_set_master_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("master");

        set_master("10.0.0.4:8080", Some(path.clone())).unwrap();

        assert_eq!(read_master_file(&path).unwrap(), "10.0.0.4:8080");
    }
}
