use crate::model::{Backend, SharedInfo, TlsAuth};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One TCP or TLS passthrough frontend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TcpService {
    pub shared: Arc<SharedInfo>,

    pub frontend_name: String,
    pub address: String,
    pub port: u16,
    pub frontend_rules: Vec<String>,
    pub offload_ssl: bool,
    /// PEM bundle (or directory) used when `offload_ssl` is set.
    pub cert_file: Option<String>,
    pub alpn_options: String,
    pub proto: String,
    pub tls_auth: Option<TlsAuth>,
    pub hosts: Vec<TcpHost>,
}

impl TcpService {
    /// `<address>:<port>`, the listener this frontend binds.
    ///
    /// A TCP service routes a list of SNI hosts, so no single host can key
    /// it; the bind address is what tells two services on one port apart.
    pub fn sort_key(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }

    pub(crate) fn backends(&self) -> impl Iterator<Item = &Backend> {
        self.hosts.iter().filter_map(|host| host.backend.as_ref())
    }
}

/// An SNI host routed to a single backend. Empty `host` matches every client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TcpHost {
    pub host: String,
    pub backend: Option<Backend>,
}
