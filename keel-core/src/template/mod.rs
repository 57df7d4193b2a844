//! HAProxy configuration rendering.
//!
//! A [`TemplateSet`] is loaded once (built-in templates, optionally
//! overridden by custom ones) and then shared by every render.
//! [`render_config`] canonicalizes and validates a model before executing
//! the entry template against it.

mod discover;
mod embedded;
mod functions;
mod loader;
mod render;
mod sources;

pub use discover::discover;
pub use embedded::BuiltinTemplates;
pub use functions::{acl_name, backend_hash, header_name, host_acls, sni_matcher};
pub use loader::{ENTRY_TEMPLATE, TemplateSet};
pub use render::render_config;
pub use sources::{DEFAULT_BUILTIN_GLOB, TemplateSources};
