use rust_embed::RustEmbed;

/// HAProxy templates compiled into the binary.
#[derive(RustEmbed)]
#[folder = "templates/"]
pub struct BuiltinTemplates;

/// Embedded `*.cfg` templates as `(file name, source)`, sorted by name.
pub(crate) fn builtin_templates() -> Vec<(String, String)> {
    let mut names: Vec<String> = BuiltinTemplates::iter()
        .map(|name| name.into_owned())
        .filter(|name| name.ends_with(".cfg"))
        .collect();
    names.sort();

    names
        .into_iter()
        .filter_map(|name| {
            let file = BuiltinTemplates::get(&name)?;
            let source = String::from_utf8_lossy(&file.data).into_owned();
            Some((name, source))
        })
        .collect()
}
