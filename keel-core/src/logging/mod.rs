use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

#[cfg(test)]
mod tests;

/// Initialize structured JSON logging with `RUST_LOG` filtering.
///
/// Defaults to `info` when `RUST_LOG` is unset. Event fields are flattened
/// into the top-level JSON object.
pub fn init_json_logging() {
    fmt()
        .with_env_filter(default_filter())
        .json()
        .flatten_event(true)
        .init();
}

/// Initialize human-readable logging for interactive use.
pub fn init_pretty_logging() {
    fmt().with_env_filter(default_filter()).init();
}

/// Pick the log format from where stdout goes.
pub fn init_logging() {
    match default_log_mode() {
        LogMode::Pretty => init_pretty_logging(),
        LogMode::Json => init_json_logging(),
    }
}

pub fn default_log_mode() -> LogMode {
    log_mode_for(io::stdout().is_terminal())
}

/// Pretty output for terminals, JSON for log collectors.
pub fn log_mode_for(is_terminal: bool) -> LogMode {
    if is_terminal {
        LogMode::Pretty
    } else {
        LogMode::Json
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    Json,
    Pretty,
}

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
