use crate::model::{Backend, BasicAuth, ExternalAuth, SharedInfo, TlsAuth};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One HTTP(S) frontend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpService {
    pub shared: Arc<SharedInfo>,

    pub frontend_name: String,
    pub address: String,
    pub port: u16,
    pub node_port: Option<u16>,
    /// HTTPS port that plain HTTP traffic on this frontend is redirected to.
    pub redirect_to_port: Option<u16>,
    pub offload_ssl: bool,
    pub alpn_options: String,
    pub proto: String,
    pub frontend_rules: Vec<String>,
    pub basic_auth: Option<BasicAuth>,
    pub tls_auth: Option<TlsAuth>,
    pub hosts: Vec<HttpHost>,
}

impl HttpService {
    /// Whether any path asks for an HTTP to HTTPS redirect.
    pub fn redirect_ssl(&self) -> bool {
        self.hosts
            .iter()
            .flat_map(|host| host.paths.iter())
            .any(|path| path.ssl_redirect)
    }

    /// Drops backend level basic-auth, used when the frontend enforces auth itself.
    pub fn remove_backend_auth(&mut self) {
        for backend in self.backends_mut() {
            backend.basic_auth = None;
        }
    }

    pub fn sort_key(&self) -> String {
        if self.offload_ssl {
            format!("https://{}", self.port)
        } else {
            format!("http://{}", self.port)
        }
    }

    pub(crate) fn backends_mut(&mut self) -> impl Iterator<Item = &mut Backend> {
        self.hosts
            .iter_mut()
            .flat_map(|host| host.paths.iter_mut())
            .filter_map(|path| path.backend.as_mut())
    }

    pub(crate) fn backends(&self) -> impl Iterator<Item = &Backend> {
        self.hosts
            .iter()
            .flat_map(|host| host.paths.iter())
            .filter_map(|path| path.backend.as_ref())
    }
}

/// A virtual host. An empty `host` is the catch-all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpHost {
    pub host: String,
    pub paths: Vec<HttpPath>,
    pub external_auth: Option<ExternalAuth>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpPath {
    pub path: String,
    pub backend: Option<Backend>,
    pub ssl_redirect: bool,
}
