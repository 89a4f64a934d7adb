// kegenv: Keg Build Environment Resolver - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_new_rejects_out_of_range() {
    assert!(LogLevel::new(6).is_ok());
    let err = LogLevel::new(7).unwrap_err();
    insta::assert_snapshot!(err, @"invalid value for 'log_level': log level must be 0-6, got 7");
}

#[test]
fn test_log_level_from_u8() {
    assert_eq!(LogLevel::from_u8(0), Some(LogLevel::SILENT));
    assert_eq!(LogLevel::from_u8(3), Some(LogLevel::INFO));
    assert_eq!(LogLevel::from_u8(6), Some(LogLevel::DUMP));
    assert_eq!(LogLevel::from_u8(100), None);
}

#[test]
fn test_log_level_filter_strings() {
    let directives: Vec<_> = (0..=6)
        .map(|n| LogLevel::new(n).unwrap().to_filter_string())
        .collect();
    assert_eq!(
        directives,
        vec!["off", "error", "warn", "info", "debug", "trace", "trace"]
    );
}

#[test]
fn test_log_level_tracing_mapping() {
    assert!(LogLevel::SILENT.to_tracing_level().is_none());
    assert_eq!(
        LogLevel::WARN.to_tracing_level(),
        Some(tracing::Level::WARN)
    );
    assert_eq!(
        LogLevel::DUMP.to_tracing_level(),
        Some(tracing::Level::TRACE)
    );
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
}

#[test]
fn test_log_config_builder() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::WARN)
        .with_file_level(LogLevel::DEBUG)
        .with_log_file("/tmp/kegenv-test.log".to_string())
        .build();
    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.file_level(), LogLevel::DEBUG);
    assert_eq!(config.log_file(), Some("/tmp/kegenv-test.log"));
}
