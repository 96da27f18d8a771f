//! Papillon REST API client.
//!
//! This crate provides a client for the Papillon datacenter power
//! monitoring REST API: topology listings over the
//! datacenter → floor → rack → host hierarchy, and power-usage queries
//! over a fixed set of look-back windows. Responses are returned as raw
//! `serde_json::Value` payloads; the remote schema is not validated.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod interval;

pub use client::{BASE_PATH, PapillonClient, PapillonClientBuilder};
pub use endpoints::request::RequestOptions;
pub use endpoints::templates::PathParams;
pub use error::{ClientError, Result};
pub use interval::Interval;
