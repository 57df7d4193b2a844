use crate::error::{LoadError, RenderError};
use crate::template::discover::discover;
use crate::template::embedded::builtin_templates;
use crate::template::functions;
use crate::template::sources::TemplateSources;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Template every render starts from.
pub const ENTRY_TEMPLATE: &str = "haproxy.cfg";

/// Pattern reported for errors in the templates embedded into the binary.
const EMBEDDED_PATTERN: &str = "embedded:templates/*.cfg";

/// A compiled, immutable set of HAProxy templates.
///
/// Templates share one namespace keyed by file name and can include each
/// other. Every template is compiled when it is added, so a set that loads
/// successfully has no syntax errors left to find at render time.
pub struct TemplateSet {
    env: Environment<'static>,
    names: BTreeSet<String>,
}

impl TemplateSet {
    /// Load templates from a built-in and a custom glob.
    ///
    /// Either glob may be empty. Custom templates replace built-in ones with
    /// the same file name.
    pub fn load(builtin: &str, custom: &str) -> Result<Self, RenderError> {
        let mut set = Self::empty();
        set.add_glob(builtin)?;
        set.add_glob(custom)?;

        let pattern = if builtin.is_empty() { custom } else { builtin };
        set.finish(pattern)
    }

    /// Load the templates embedded into the binary.
    pub fn builtin() -> Result<Self, RenderError> {
        Self::builtin_with_overrides("")
    }

    /// Load the embedded templates, then the ones matching `custom` on top.
    pub fn builtin_with_overrides(custom: &str) -> Result<Self, RenderError> {
        let mut set = Self::empty();
        for (name, source) in builtin_templates() {
            set.add(name, source).map_err(|e| RenderError::load(EMBEDDED_PATTERN, e))?;
        }
        set.add_glob(custom)?;
        set.finish(EMBEDDED_PATTERN)
    }

    pub fn from_sources(sources: &TemplateSources) -> Result<Self, RenderError> {
        Self::load(&sources.builtin, &sources.custom)
    }

    /// Registered template names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub(crate) fn render<S: Serialize>(
        &self,
        name: &str,
        ctx: S,
    ) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(ctx)
    }

    fn empty() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        functions::register(&mut env);

        Self {
            env,
            names: BTreeSet::new(),
        }
    }

    fn add_glob(&mut self, pattern: &str) -> Result<(), RenderError> {
        if pattern.is_empty() {
            return Ok(());
        }

        let paths = discover(pattern).map_err(|e| RenderError::load(pattern, e))?;
        for path in paths {
            self.add_file(&path).map_err(|e| RenderError::load(pattern, e))?;
        }
        Ok(())
    }

    fn add_file(&mut self, path: &Path) -> Result<(), LoadError> {
        let source = fs::read_to_string(path).map_err(|source| LoadError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        self.add(name, source)
    }

    fn add(&mut self, name: String, source: String) -> Result<(), LoadError> {
        self.env
            .add_template_owned(name.clone(), source)
            .map_err(|source| LoadError::Syntax {
                name: name.clone(),
                source,
            })?;

        if !self.names.insert(name.clone()) {
            debug!(template = %name, "template overridden");
        }
        Ok(())
    }

    fn finish(self, pattern: &str) -> Result<Self, RenderError> {
        if !self.contains(ENTRY_TEMPLATE) {
            return Err(RenderError::load(
                pattern,
                LoadError::MissingEntry {
                    name: ENTRY_TEMPLATE.to_string(),
                },
            ));
        }

        info!(templates = self.names.len(), "loaded haproxy templates");
        Ok(self)
    }
}

impl fmt::Debug for TemplateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateSet")
            .field("names", &self.names)
            .finish_non_exhaustive()
    }
}
