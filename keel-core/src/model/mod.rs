mod auth;
mod backend;
mod defaults;
mod http;
mod resolver;
mod shared;
mod tcp;
mod template_data;
#[cfg(test)]
mod tests;

pub use auth::*;
pub use backend::*;
pub use defaults::*;
pub use http::*;
pub use resolver::*;
pub use shared::*;
pub use tcp::*;
pub use template_data::*;

/// Path served by the ACME HTTP-01 challenge responder.
pub const ACME_URL_PREFIX: &str = "/.well-known/acme-challenge/";

/// Port the ACME challenge responder listens on inside the proxy pod.
pub const ACME_RESPONDER_PORT: u16 = 56791;

/// Host value that routing resources use to mean "any host".
pub const MATCH_ALL: &str = "*";
