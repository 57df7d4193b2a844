//! Compiles the desired state of an ingress proxy into HAProxy configuration.
//!
//! The pipeline is [`canonical::canonicalize`], then
//! [`validation::is_valid`], then template execution; [`render_config`] runs
//! all three against a [`TemplateSet`] loaded once at startup.

pub mod canonical;
pub mod error;
pub mod logging;
pub mod model;
pub mod template;
pub mod validation;

pub use error::{LoadError, RenderError};
pub use model::TemplateData;
pub use template::{TemplateSet, TemplateSources, render_config};
