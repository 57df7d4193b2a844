//! Helper library shared by every template in a [`super::TemplateSet`].
//!
//! - `acl_name(path)`: turn a path into a valid ACL name token
//! - `header_name(rule)`: header name of a raw header rule
//! - `host_acls(host, port, node_port, redirect_to_port, use_node_port)`:
//!   host matching conditions for a frontend
//! - `sni_matcher(offload_ssl, host)`: SNI condition for TLS frontends
//! - `backend_hash(value, index, mode)`: stable sticky cookie value

use base64::{Engine, engine::general_purpose::STANDARD};
use md5::Md5;
use minijinja::{Environment, Error, ErrorKind};
use sha2::{Digest, Sha512};

pub(crate) fn register(env: &mut Environment<'static>) {
    env.add_function("acl_name", acl_name);
    env.add_function("header_name", header_name);
    env.add_function("host_acls", host_acls);
    env.add_function("sni_matcher", sni_matcher);
    env.add_function("backend_hash", backend_hash);

    env.add_filter("acl_name", acl_name);
    env.add_filter("header_name", header_name);
}

/// Build an HAProxy ACL name from a path.
///
/// ACL names may only contain letters, digits, `-`, `_`, `.` and `:`.
///
/// Usage: `{{ path.path | acl_name }}`
pub fn acl_name(value: &str) -> String {
    let value = value.strip_prefix('/').unwrap_or(value);
    let value = value.strip_suffix('/').unwrap_or(value);
    value.replace('/', "-").replace('*', ".")
}

/// Name of the header a raw `<name> <value>` rule sets.
///
/// Usage: `{{ rule | header_name }}`
pub fn header_name(value: &str) -> String {
    let value = value.trim();
    match value.find(' ') {
        Some(index) => value[..index].to_string(),
        None => String::new(),
    }
}

/// Conditions matching the `Host` header of requests for `host`.
///
/// Errors on the catch-all host: templates must not emit host ACLs for it.
pub fn host_acls(
    host: &str,
    port: u16,
    node_port: Option<u16>,
    redirect_to_port: Option<u16>,
    use_node_port: bool,
) -> Result<Vec<String>, Error> {
    let host = host.trim();
    if host.is_empty() || host == crate::model::MATCH_ALL {
        return Err(Error::new(
            ErrorKind::InvalidOperation,
            "host_acls called for the catch-all host",
        ));
    }

    let mut conditions = Vec::new();
    match node_port {
        Some(node_port) if use_node_port && node_port > 0 => {
            conditions.push(host_matcher(&format!("{host}:{node_port}")));
        }
        _ if port == 80 || port == 443 => {
            conditions.push(host_matcher(host));
            conditions.push(host_matcher(&format!("{host}:{port}")));
        }
        _ => {
            conditions.push(host_matcher(&format!("{host}:{port}")));
        }
    }

    // Requests to the HTTPS redirect target still belong to this host.
    if let Some(redirect_to_port) = redirect_to_port
        && port == 80
        && redirect_to_port > 0
    {
        conditions.push(host_matcher(&format!("{host}:{redirect_to_port}")));
    }

    Ok(conditions)
}

fn host_matcher(value: &str) -> String {
    match value.strip_prefix('*') {
        Some(suffix) => format!("hdr_end(host) -i {suffix}"),
        None => format!("hdr(host) -i {value}"),
    }
}

/// SNI condition for a TLS frontend, terminated or passed through.
pub fn sni_matcher(offload_ssl: bool, host: &str) -> String {
    match (offload_ssl, host.strip_prefix('*')) {
        (true, Some(suffix)) => format!("ssl_fc_sni_end -i {suffix}"),
        (true, None) => format!("ssl_fc_sni -i {host}"),
        (false, Some(suffix)) => format!("req_ssl_sni -i -m end {suffix}"),
        (false, None) => format!("req_ssl_sni -i {host}"),
    }
}

/// Sticky cookie value for the `index`-th server of a backend.
///
/// `md5` and `sha` hash `value` (base64), `index` uses the 1-based position,
/// anything else returns `value` unchanged.
pub fn backend_hash(value: &str, index: usize, mode: &str) -> String {
    match mode {
        "md5" => STANDARD.encode(Md5::digest(value.as_bytes())),
        "sha" => STANDARD.encode(Sha512::digest(value.as_bytes())),
        "index" => (index + 1).to_string(),
        _ => value.to_string(),
    }
}
