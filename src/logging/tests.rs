// gitscope: git repository inspection via the git CLI
//
// SPDX-FileCopyrightText: 2026 gitscope contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(5).is_ok());
    assert!(LogLevel::new(6).is_err());
    assert_eq!(LogLevel::from_u8(6), None);
    assert_eq!(LogLevel::from_u8(4), Some(LogLevel::DEBUG));
}

#[test]
fn test_log_level_from_int_saturates() {
    assert_eq!(LogLevel::from_int(0), LogLevel::SILENT);
    assert_eq!(LogLevel::from_int(3), LogLevel::INFO);
    assert_eq!(LogLevel::from_int(5), LogLevel::TRACE);
    assert_eq!(LogLevel::from_int(100), LogLevel::TRACE);
}

#[test]
fn test_log_level_filter_strings() {
    let filters: Vec<&str> = (0..=5)
        .map(|l| LogLevel::from_int(l).to_filter_string())
        .collect();
    assert_eq!(filters, ["off", "error", "warn", "info", "debug", "trace"]);
}

#[test]
fn test_log_level_serde_roundtrip() {
    let json = serde_json::to_string(&LogLevel::DEBUG).unwrap();
    assert_eq!(json, "4");
    let back: LogLevel = serde_json::from_str(&json).unwrap();
    assert_eq!(back, LogLevel::DEBUG);

    // Out-of-range values are rejected at deserialization time
    assert!(serde_json::from_str::<LogLevel>("9").is_err());
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
    assert!(!config.show_target());
}
