use crate::error::RenderError;
use crate::model::TemplateData;
use std::collections::HashSet;

/// Check the global uniqueness HAProxy needs from a canonical model.
///
/// Must run after [`crate::canonical::canonicalize`]: generated backend
/// names only become unique there. Fails fast on the first reused name.
pub fn is_valid(data: &TemplateData) -> Result<(), RenderError> {
    let mut frontends = HashSet::new();
    let mut backends = HashSet::new();

    if let Some(backend) = &data.default_backend {
        backends.insert(backend.name.as_str());
    }

    for svc in &data.http_services {
        if !frontends.insert(svc.frontend_name.as_str()) {
            return Err(RenderError::DuplicateFrontendName {
                name: svc.frontend_name.clone(),
            });
        }

        for backend in svc.backends() {
            if !backends.insert(backend.name.as_str()) {
                return Err(RenderError::DuplicateBackendName {
                    name: backend.name.clone(),
                });
            }
        }
    }

    for svc in &data.tcp_services {
        if !frontends.insert(svc.frontend_name.as_str()) {
            return Err(RenderError::DuplicateFrontendName {
                name: svc.frontend_name.clone(),
            });
        }

        for backend in svc.backends() {
            if !backends.insert(backend.name.as_str()) {
                return Err(RenderError::DuplicateBackendName {
                    name: backend.name.clone(),
                });
            }
        }
    }

    Ok(())
}
