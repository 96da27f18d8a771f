//! Endpoint template table and path resolution.
//!
//! Every Papillon resource is addressed by a fixed path template relative to
//! the master base URL. Templates carry placeholder tokens that are
//! substituted from a [`PathParams`] set; the power templates end in `?` so
//! the time-range query string can be appended without a second `?`.

use crate::error::{ClientError, Result};

/// Path templates for every Papillon resource, keyed by resource name.
pub const ENDPOINT_TEMPLATES: &[(&str, &str)] = &[
    ("datacenters", "datacenters/"),
    ("floors", "datacenters/{datacenterId}/allfloors"),
    ("racks", "datacenters/{datacenterId}/floors/{floorId}/racks/"),
    (
        "hosts",
        "datacenters/{datacenterId}/floors/{floorId}/racks/{rackId}/hosts",
    ),
    ("datacenter-power", "datacenters/{datacenterId}/power?"),
    (
        "floor-power",
        "datacenters/{datacenterId}/floors/{floorId}/power?",
    ),
    (
        "rack-power",
        "datacenters/{datacenterId}/floors/{floorId}/racks/{rackId}/power?",
    ),
    (
        "host-power",
        "datacenters/{datacenterId}/floors/{floorId}/racks/{rackId}/hosts/{hostId}/power?",
    ),
];

/// Identifier set substituted into an endpoint template.
///
/// Identifiers are opaque: whatever the caller supplies is substituted
/// verbatim. An identifier absent from the set leaves its placeholder token
/// untouched in the resolved path.
#[derive(Debug, Clone, Default)]
pub struct PathParams {
    datacenter_id: Option<String>,
    floor_id: Option<String>,
    rack_id: Option<String>,
    host_id: Option<String>,
}

impl PathParams {
    /// Create an empty identifier set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the datacenter identifier.
    pub fn datacenter(mut self, id: impl ToString) -> Self {
        self.datacenter_id = Some(id.to_string());
        self
    }

    /// Set the floor identifier.
    pub fn floor(mut self, id: impl ToString) -> Self {
        self.floor_id = Some(id.to_string());
        self
    }

    /// Set the rack identifier.
    pub fn rack(mut self, id: impl ToString) -> Self {
        self.rack_id = Some(id.to_string());
        self
    }

    /// Set the host identifier.
    pub fn host(mut self, id: impl ToString) -> Self {
        self.host_id = Some(id.to_string());
        self
    }

    fn tokens(&self) -> [(&'static str, Option<&str>); 4] {
        [
            ("{datacenterId}", self.datacenter_id.as_deref()),
            ("{floorId}", self.floor_id.as_deref()),
            ("{rackId}", self.rack_id.as_deref()),
            ("{hostId}", self.host_id.as_deref()),
        ]
    }
}

/// Look up the path template for a resource name.
pub fn template(resource: &str) -> Option<&'static str> {
    ENDPOINT_TEMPLATES
        .iter()
        .find(|(name, _)| *name == resource)
        .map(|(_, tpl)| *tpl)
}

/// Resolve a resource name to a relative path.
///
/// Placeholder tokens are disjoint, so a single pass over the token set
/// produces the same path regardless of substitution order.
pub fn resolve(resource: &str, params: &PathParams) -> Result<String> {
    let tpl =
        template(resource).ok_or_else(|| ClientError::UnknownResource(resource.to_string()))?;

    let mut path = tpl.to_string();
    for (token, value) in params.tokens() {
        if let Some(value) = value {
            path = path.replace(token, value);
        }
    }
    Ok(path)
}

/// Resolve a resource name to a full URL under the given base.
pub fn resolve_url(base_url: &str, resource: &str, params: &PathParams) -> Result<String> {
    Ok(format!("{}{}", base_url, resolve(resource, params)?))
}
