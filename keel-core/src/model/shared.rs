use serde::{Deserialize, Serialize};

/// Settings that apply to every frontend rendered from one routing resource.
///
/// The root and every service hold the same `Arc<SharedInfo>` snapshot.
/// Nothing in the compiler mutates it once the model is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharedInfo {
    /// Add `accept-proxy` to bind statements.
    pub accept_proxy: bool,
    pub cors: CorsConfig,
    pub proxy_body_size: String,
    pub enable_hsts: bool,
    pub hsts_max_age: u64,
    pub hsts_preload: bool,
    pub hsts_include_subdomains: bool,
    pub whitelist_source_range: String,
    pub max_connections: u32,
    pub use_node_port: bool,
    pub limit: Option<Limit>,
    pub hard_stop_after: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub enabled: bool,
    pub allowed_origin: String,
    pub allowed_methods: String,
    pub allowed_headers: String,
    pub allow_credentials: bool,
}

/// Per-source connection and request rate limits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limit {
    pub connection: u32,
    pub time_second: u32,
    pub rate: u32,
}
