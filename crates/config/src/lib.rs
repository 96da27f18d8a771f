//! Configuration management for the Papillon client.
//!
//! This crate provides types and loaders for the Papillon master address
//! and request timeout, sourced from environment variables and a persisted
//! master-address file.

pub mod constants;
mod loader;
pub mod persistence;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use persistence::{default_master_file_path, read_master_file, write_master_file};
pub use types::Config;
