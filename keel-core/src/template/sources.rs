use serde::{Deserialize, Serialize};

/// Glob the controller image ships its templates under.
pub const DEFAULT_BUILTIN_GLOB: &str = "/srv/haproxy/templates/*.cfg";

/// Where a [`super::TemplateSet`] reads its templates from.
///
/// Files are registered under their file name, `builtin` first and `custom`
/// second, so a custom `backend.cfg` replaces the built-in one. An empty glob
/// is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateSources {
    pub builtin: String,
    pub custom: String,
}

impl Default for TemplateSources {
    fn default() -> Self {
        Self {
            builtin: DEFAULT_BUILTIN_GLOB.to_string(),
            custom: String::new(),
        }
    }
}
