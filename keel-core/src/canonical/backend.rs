use crate::model::Backend;
use md5::{Digest, Md5};
use tracing::debug;

/// Give a generated backend name a stable unique suffix when it collides,
/// then put its endpoints and auth references in a fixed order.
///
/// The suffix is derived only from `host`, `port` and `path`, so the same
/// route keeps the same backend name on every reconciliation.
pub(crate) fn canonicalize_backend(
    backend: &mut Backend,
    has_duplicate: bool,
    host: &str,
    port: &str,
    path: &str,
) {
    if backend.name_generated && has_duplicate {
        let suffix = disambiguation_suffix(host, port, path);
        // Already renamed by an earlier pass.
        if !backend.name.ends_with(&suffix) {
            debug!(
                backend = %backend.name,
                host,
                port,
                path,
                "disambiguating generated backend name"
            );
            backend.name.push_str(&suffix);
        }
    }

    backend
        .endpoints
        .sort_by(|a, b| a.ip.cmp(&b.ip).then_with(|| a.port.cmp(&b.port)));

    if let Some(auth) = backend.basic_auth.as_mut() {
        auth.user_lists.sort();
    }
}

fn disambiguation_suffix(host: &str, port: &str, path: &str) -> String {
    let digest = Md5::digest(format!("{host}-{port}-{path}").as_bytes());
    format!("-{digest:x}")
}
