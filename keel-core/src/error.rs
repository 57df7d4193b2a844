use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    //-------------------------------------------------------------------------
    // Validation
    //-------------------------------------------------------------------------
    #[error("haproxy frontend name {name} is reused")]
    DuplicateFrontendName { name: String },

    #[error("haproxy backend name {name} is reused")]
    DuplicateBackendName { name: String },

    //-------------------------------------------------------------------------
    // Templates
    //-------------------------------------------------------------------------
    #[error("failed to execute template '{template}': {source}")]
    TemplateExecutionFailed {
        template: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("failed to load templates from '{pattern}': {source}")]
    TemplateLoadFailed {
        pattern: String,
        #[source]
        source: LoadError,
    },
}

/// Why a template glob could not be turned into a template set.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),

    #[error("failed to read template file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template '{name}' does not compile: {source}")]
    Syntax {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("entry template '{name}' is not defined")]
    MissingEntry { name: String },
}

impl RenderError {
    pub fn load(pattern: impl Into<String>, source: impl Into<LoadError>) -> Self {
        Self::TemplateLoadFailed {
            pattern: pattern.into(),
            source: source.into(),
        }
    }
}
