use crate::model::{Backend, HttpHost, HttpPath, TcpHost};
use std::cmp::Ordering;

/// Specificity of a host: exact (2) beats wildcard (1) beats catch-all (0).
pub fn host_rank(host: &str) -> u8 {
    if host.is_empty() {
        0
    } else if host.starts_with('*') {
        1
    } else {
        2
    }
}

/// Lowercased host with any `*.` wildcard marker removed.
pub fn host_name(host: &str) -> String {
    if host.is_empty() {
        return String::new();
    }
    host.strip_prefix("*.").unwrap_or(host).to_lowercase()
}

fn normalize_path(path: &str) -> String {
    path.trim_matches('/').to_lowercase()
}

/// Most specific host first. Hosts that only differ in case fall back to
/// the raw string.
fn host_order(a: &str, b: &str) -> Ordering {
    host_rank(b)
        .cmp(&host_rank(a))
        .then_with(|| host_name(b).cmp(&host_name(a)))
        .then_with(|| b.cmp(a))
}

/// Deepest path first, then reverse lexical order of the normalized path.
///
/// Segments are counted after trimming outer slashes, so `/` and the empty
/// path both count as one. Paths equal after normalization (`/api`, `/api/`)
/// fall back to the raw string.
fn path_order(a: &str, b: &str) -> Ordering {
    let (norm_a, norm_b) = (normalize_path(a), normalize_path(b));
    let (depth_a, depth_b) = (norm_a.split('/').count(), norm_b.split('/').count());

    depth_b
        .cmp(&depth_a)
        .then_with(|| norm_b.cmp(&norm_a))
        .then_with(|| b.cmp(a))
}

/// Order of two HTTP paths of one host; identical paths fall back to the
/// backend name.
pub(crate) fn http_path_order(a: &HttpPath, b: &HttpPath) -> Ordering {
    path_order(&a.path, &b.path)
        .then_with(|| backend_name(a.backend.as_ref()).cmp(backend_name(b.backend.as_ref())))
}

/// Order of two HTTP hosts whose paths are already sorted.
///
/// Hosts with the same name (a `*` and an empty host both end up as the
/// catch-all) are ordered by their routes.
pub(crate) fn http_host_order(a: &HttpHost, b: &HttpHost) -> Ordering {
    host_order(&a.host, &b.host).then_with(|| routes(a).cmp(routes(b)))
}

pub(crate) fn tcp_host_order(a: &TcpHost, b: &TcpHost) -> Ordering {
    host_order(&a.host, &b.host)
        .then_with(|| backend_name(a.backend.as_ref()).cmp(backend_name(b.backend.as_ref())))
}

fn routes(host: &HttpHost) -> impl Iterator<Item = (&str, &str)> {
    host.paths
        .iter()
        .map(|path| (path.path.as_str(), backend_name(path.backend.as_ref())))
}

fn backend_name(backend: Option<&Backend>) -> &str {
    backend.map_or("", |backend| backend.name.as_str())
}
