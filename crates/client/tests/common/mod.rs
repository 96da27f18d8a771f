//! Common test utilities for integration tests.
//!
//! Re-exports the types every integration test needs and provides a helper
//! for building a client pointed at a wiremock server.
//!
//! # Invariants
//! - Clients built here use the same defaults as production (4 s timeout,
//!   JSON headers); only the master address differs.

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use papillon_client::{ClientError, Interval, PapillonClient, endpoints};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::matchers::{header, method, path, query_param};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a client whose master address is the given mock server.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> PapillonClient {
    PapillonClient::builder()
        .master_addr(server.uri())
        .build()
        .expect("client builds against mock server")
}

/// The base URL a mock server exposes the REST API under.
#[allow(dead_code)]
pub fn base_url_for(server: &MockServer) -> String {
    format!("{}/papillonserver/rest/", server.uri())
}
