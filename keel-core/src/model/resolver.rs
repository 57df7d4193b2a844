use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A `resolvers` section used by endpoints that resolve by name at runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnsResolver {
    pub name: String,
    pub name_servers: Vec<String>,
    pub retries: u32,
    /// Keyed by event, e.g. `retry` -> `1s`.
    pub timeout: BTreeMap<String, String>,
    /// Keyed by status, e.g. `valid` -> `10s`.
    pub hold: BTreeMap<String, String>,
    pub check_health: bool,
}
