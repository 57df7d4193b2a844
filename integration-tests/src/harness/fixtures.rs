use keel_core::{TemplateData, TemplateSet, render_config};
use std::fs;
use std::path::PathBuf;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Deserialize a model from `fixtures/<file>`.
pub fn load_fixture(file: &str) -> TemplateData {
    let path = fixtures_dir().join(file);
    let json = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));

    serde_json::from_str(&json)
        .unwrap_or_else(|e| panic!("failed to parse fixture {}: {e}", path.display()))
}

/// Render a fixture with the built-in templates.
pub fn render_fixture(file: &str) -> String {
    let templates = TemplateSet::builtin().expect("built-in templates must load");
    render_config(&templates, load_fixture(file)).expect("fixture must render")
}
