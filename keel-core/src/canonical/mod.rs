//! Deterministic normalization of a [`TemplateData`] before it is validated
//! and rendered.
//!
//! HAProxy evaluates `use_backend` rules top-down, so the order in which
//! hosts and paths are emitted decides which rule wins. Everything here
//! exists to make that order both correct and reproducible: two models that
//! describe the same routes must produce byte-identical configuration, or the
//! controller reloads the proxy for nothing.

mod acme;
mod backend;
mod order;

use crate::model::{MATCH_ALL, TemplateData};
use std::collections::HashMap;

use acme::hoist_acme_path;
use backend::canonicalize_backend;
use order::{http_host_order, http_path_order, tcp_host_order};
pub use order::{host_name, host_rank};

/// Canonicalize the model in place.
///
/// Never fails. Anything left inconsistent here is reported by
/// [`crate::validation::is_valid`].
pub fn canonicalize(data: &mut TemplateData) {
    normalize_wildcard_hosts(data);

    let backend_names = count_backend_names(data);
    let has_duplicate = |name: &str| backend_names.get(name).copied().unwrap_or(0) > 1;

    //--------------------------------------------------------------------------
    // Default backend
    //--------------------------------------------------------------------------
    if let Some(backend) = data.default_backend.as_mut() {
        let duplicate = has_duplicate(&backend.name);
        canonicalize_backend(backend, duplicate, "", "", "");
    }

    //--------------------------------------------------------------------------
    // HTTP services
    //--------------------------------------------------------------------------
    for svc in &mut data.http_services {
        if let Some(auth) = svc.basic_auth.as_mut() {
            auth.user_lists.sort();
        }

        let port = svc.port.to_string();
        for host in &mut svc.hosts {
            for path in &mut host.paths {
                if let Some(backend) = path.backend.as_mut() {
                    let duplicate = has_duplicate(&backend.name);
                    canonicalize_backend(backend, duplicate, &host.host, &port, &path.path);
                }
            }
            host.paths.sort_by(http_path_order);
        }
        svc.hosts.sort_by(http_host_order);

        if let Some(tls_auth) = svc.tls_auth.as_mut() {
            tls_auth.headers.sort_by(|a, b| a.header.cmp(&b.header));
        }
    }

    //--------------------------------------------------------------------------
    // TCP services
    //--------------------------------------------------------------------------
    for svc in &mut data.tcp_services {
        let port = svc.port.to_string();
        for host in &mut svc.hosts {
            if let Some(backend) = host.backend.as_mut() {
                let duplicate = has_duplicate(&backend.name);
                canonicalize_backend(backend, duplicate, &host.host, &port, "");
            }
        }
        svc.hosts.sort_by(tcp_host_order);

        if let Some(tls_auth) = svc.tls_auth.as_mut() {
            tls_auth.headers.sort_by(|a, b| a.header.cmp(&b.header));
        }
    }

    //--------------------------------------------------------------------------
    // Top-level tables
    //--------------------------------------------------------------------------
    data.http_services.sort_by(|a, b| {
        (a.sort_key(), &a.frontend_name).cmp(&(b.sort_key(), &b.frontend_name))
    });
    data.tcp_services.sort_by(|a, b| {
        (a.sort_key(), &a.frontend_name).cmp(&(b.sort_key(), &b.frontend_name))
    });
    data.dns_resolvers.sort_by(|a, b| a.name.cmp(&b.name));

    for list in &mut data.user_lists {
        list.users.sort_by(|a, b| a.username.cmp(&b.username));
    }
    data.user_lists.sort_by(|a, b| a.name.cmp(&b.name));

    data.timeout_defaults.sort_by(|a, b| a.phase.cmp(&b.phase));
    data.option_defaults.sort_by(|a, b| a.option.cmp(&b.option));

    for svc in &mut data.http_services {
        hoist_acme_path(svc);
    }
}

fn normalize_wildcard_hosts(data: &mut TemplateData) {
    let http_hosts = data
        .http_services
        .iter_mut()
        .flat_map(|svc| svc.hosts.iter_mut())
        .map(|host| &mut host.host);
    let tcp_hosts = data
        .tcp_services
        .iter_mut()
        .flat_map(|svc| svc.hosts.iter_mut())
        .map(|host| &mut host.host);

    for host in http_hosts.chain(tcp_hosts) {
        if host.as_str() == MATCH_ALL {
            host.clear();
        }
    }
}

/// How many backends currently carry each name.
fn count_backend_names(data: &TemplateData) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    let http = data.http_services.iter().flat_map(|svc| svc.backends());
    let tcp = data.tcp_services.iter().flat_map(|svc| svc.backends());

    for backend in data.default_backend.iter().chain(http).chain(tcp) {
        *counts.entry(backend.name.clone()).or_default() += 1;
    }
    counts
}
