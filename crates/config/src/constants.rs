//! Centralized constants for the Papillon workspace.
//!
//! Default values used across crates to avoid magic number duplication.

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 4;

/// Fixed REST base path on the Papillon master.
pub const DEFAULT_BASE_PATH: &str = "/papillonserver/rest/";

/// Environment variable naming the master address (`host[:port]`).
pub const ENV_MASTER_ADDR: &str = "PAPILLON_MASTER_ADDR";

/// Environment variable overriding the request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "PAPILLON_TIMEOUT_SECS";

/// Environment variable overriding the persisted master-address file path.
pub const ENV_MASTER_FILE: &str = "PAPILLON_MASTER_FILE";

/// File name of the persisted master address under the config dir.
pub const MASTER_FILE_NAME: &str = "master";
