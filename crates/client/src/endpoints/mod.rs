//! REST API endpoint implementations.

pub mod power;
pub mod request;
pub mod templates;
pub mod topology;

pub use power::{datacenter_power, floor_power, host_power, rack_power};
pub use request::{RequestOptions, build_url, get_json};
pub use templates::{ENDPOINT_TEMPLATES, PathParams, resolve, resolve_url, template};
pub use topology::{list_datacenters, list_floors, list_hosts, list_racks};
