use crate::model::{
    Backend, DnsResolver, ErrorFile, HttpService, OptionConfig, SharedInfo, StatsInfo,
    TcpService, TimeoutConfig, UserList,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Desired proxy state for one render pass.
///
/// Built by the translator from routing resources, canonicalized in place,
/// then rendered and thrown away.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateData {
    pub shared: Arc<SharedInfo>,
    pub default_backend: Option<Backend>,
    pub timeout_defaults: Vec<TimeoutConfig>,
    pub option_defaults: Vec<OptionConfig>,
    pub stats: Option<StatsInfo>,
    pub dns_resolvers: Vec<DnsResolver>,
    pub http_services: Vec<HttpService>,
    pub tcp_services: Vec<TcpService>,
    pub error_files: Vec<ErrorFile>,
    pub user_lists: Vec<UserList>,
}

impl TemplateData {
    pub fn uses_tls_auth(&self) -> bool {
        self.http_services.iter().any(|svc| svc.tls_auth.is_some())
            || self.tcp_services.iter().any(|svc| svc.tls_auth.is_some())
    }

    /// True if any HTTP host delegates authentication to an external service.
    pub fn uses_external_auth(&self) -> bool {
        self.http_services
            .iter()
            .flat_map(|svc| &svc.hosts)
            .any(|host| host.external_auth.is_some())
    }
}

impl fmt::Display for TemplateData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string_pretty(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
