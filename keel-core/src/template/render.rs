use crate::canonical::canonicalize;
use crate::error::RenderError;
use crate::model::TemplateData;
use crate::template::loader::{ENTRY_TEMPLATE, TemplateSet};
use crate::validation::is_valid;
use serde::Serialize;
use tracing::error;

/// Root value templates see: the model plus a few aggregates over it.
#[derive(Serialize)]
struct RenderContext<'a> {
    #[serde(flatten)]
    data: &'a TemplateData,
    uses_tls_auth: bool,
    uses_external_auth: bool,
}

/// Render a complete HAProxy configuration.
///
/// The model is canonicalized and validated first, so the output only
/// depends on the set of services, never on the order they were collected
/// in. On error no partial text is returned.
pub fn render_config(
    templates: &TemplateSet,
    mut data: TemplateData,
) -> Result<String, RenderError> {
    canonicalize(&mut data);
    is_valid(&data)?;

    let ctx = RenderContext {
        data: &data,
        uses_tls_auth: data.uses_tls_auth(),
        uses_external_auth: data.uses_external_auth(),
    };

    let rendered = templates.render(ENTRY_TEMPLATE, &ctx).map_err(|source| {
        error!(template = ENTRY_TEMPLATE, error = %source, "failed to render haproxy config");
        RenderError::TemplateExecutionFailed {
            template: ENTRY_TEMPLATE.to_string(),
            source,
        }
    })?;

    Ok(strip_blank_lines(&rendered))
}

fn strip_blank_lines(text: &str) -> String {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
