use crate::logging::{LogMode, default_log_mode, log_mode_for};
use pretty_assertions::assert_eq;
use std::io::{self, IsTerminal};

#[test]
fn terminals_get_pretty_output() {
    assert_eq!(log_mode_for(true), LogMode::Pretty);
}

#[test]
fn redirected_output_gets_json() {
    assert_eq!(log_mode_for(false), LogMode::Json);
}

#[test]
fn default_mode_follows_stdout() {
    // Arrange
    let is_terminal = io::stdout().is_terminal();

    // Act
    let mode = default_log_mode();

    // Assert
    assert_eq!(mode, log_mode_for(is_terminal));
}
