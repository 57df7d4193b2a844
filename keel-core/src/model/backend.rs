use crate::model::BasicAuth;
use serde::{Deserialize, Serialize};

/// A named pool of servers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Backend {
    pub name: String,
    /// The name was derived by the translator rather than given by the user,
    /// so the compiler is free to rename it.
    pub name_generated: bool,
    pub basic_auth: Option<BasicAuth>,
    pub backend_rules: Vec<String>,
    pub endpoints: Vec<Endpoint>,

    pub sticky: bool,
    pub sticky_cookie_name: String,
    /// `md5`, `sha`, `index` or empty for the raw server name.
    pub sticky_cookie_hash: String,

    pub alpn_options: String,
    pub proto: String,
    pub load_balance_on: String,
}

/// A single server target of a backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoint {
    pub name: String,
    pub ip: String,
    pub port: u16,
    pub weight: Option<u32>,
    pub max_connections: Option<u32>,
    /// Resolved at runtime through `dns_resolver` instead of `ip`.
    pub external_name: String,
    pub use_dns_resolver: bool,
    pub dns_resolver: String,
    pub check_health: bool,
    pub check_health_port: Option<u16>,
    pub tls_option: String,
    pub send_proxy: String,
    pub agent_port: Option<u16>,
    pub agent_interval: String,
}
