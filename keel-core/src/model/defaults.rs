use crate::model::TlsHeader;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    pub phase: String,
    pub duration: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionConfig {
    pub option: String,
    pub enabled: bool,
}

/// One `errorfile`/`errorloc` style directive for a status code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorFile {
    pub status_code: String,
    pub command: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsInfo {
    pub port: u16,
    pub username: String,
    pub password: String,
}

/// Converts a `phase -> duration` annotation map into timeout rows.
pub fn timeout_configs(input: &BTreeMap<String, String>) -> Vec<TimeoutConfig> {
    input
        .iter()
        .map(|(phase, duration)| TimeoutConfig {
            phase: phase.clone(),
            duration: duration.clone(),
        })
        .collect()
}

pub fn option_configs(input: &BTreeMap<String, bool>) -> Vec<OptionConfig> {
    input
        .iter()
        .map(|(option, enabled)| OptionConfig {
            option: option.clone(),
            enabled: *enabled,
        })
        .collect()
}

pub fn tls_headers(input: &BTreeMap<String, String>) -> Vec<TlsHeader> {
    input
        .iter()
        .map(|(header, value)| TlsHeader {
            header: header.clone(),
            value: value.clone(),
        })
        .collect()
}
