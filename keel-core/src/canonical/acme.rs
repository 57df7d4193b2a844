use crate::model::{ACME_URL_PREFIX, HttpHost, HttpService};
use std::iter;
use tracing::debug;

/// Move the ACME HTTP-01 challenge path of a port 80 service in front of
/// every other host so no user rule can shadow it.
///
/// Only catch-all hosts are searched and only the first match is hoisted.
pub(crate) fn hoist_acme_path(svc: &mut HttpService) {
    if svc.port != 80 {
        return;
    }

    let Some((host_idx, path_idx)) = svc
        .hosts
        .iter()
        .enumerate()
        .filter(|(_, host)| host.host.is_empty())
        .find_map(|(i, host)| {
            host.paths
                .iter()
                .position(|path| path.path == ACME_URL_PREFIX)
                .map(|j| (i, j))
        })
    else {
        return;
    };

    let mut challenge = Vec::with_capacity(1);
    let mut hosts = Vec::with_capacity(svc.hosts.len() + 1);

    for (i, mut host) in std::mem::take(&mut svc.hosts).into_iter().enumerate() {
        if i == host_idx {
            let (hoisted, rest): (Vec<_>, Vec<_>) = host
                .paths
                .into_iter()
                .enumerate()
                .partition(|(j, _)| *j == path_idx);

            challenge.extend(hoisted.into_iter().map(|(_, path)| path));
            host.paths = rest.into_iter().map(|(_, path)| path).collect();

            if host.paths.is_empty() {
                continue;
            }
        }
        hosts.push(host);
    }

    debug!(frontend = %svc.frontend_name, "hoisted acme challenge path");

    let acme_host = HttpHost {
        host: String::new(),
        paths: challenge,
        external_auth: None,
    };
    svc.hosts = iter::once(acme_host).chain(hosts).collect();
}
