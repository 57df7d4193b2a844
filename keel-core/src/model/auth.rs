use serde::{Deserialize, Serialize};

/// A named set of basic-auth credentials rendered as an HAProxy `userlist`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserList {
    pub name: String,
    pub users: Vec<AuthUser>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthUser {
    pub username: String,
    pub password: String,
    pub encrypted: bool,
}

/// Basic-auth requirement referencing user lists by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicAuth {
    pub realm: String,
    pub user_lists: Vec<String>,
}

/// TLS client certificate authentication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TlsAuth {
    pub ca_file: String,
    pub crl_file: String,
    pub verify_client: String,
    pub headers: Vec<TlsHeader>,
    pub error_page: String,
    pub error_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TlsHeader {
    pub header: String,
    pub value: String,
}

/// External (oauth2-proxy style) authentication for a set of paths on a host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalAuth {
    pub auth_backend: String,
    pub auth_backend_path: String,
    pub auth_path: String,
    pub signin_path: String,
    pub paths: Vec<String>,
}
