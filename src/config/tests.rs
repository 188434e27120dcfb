// gitscope: git repository inspection via the git CLI
//
// SPDX-FileCopyrightText: 2026 gitscope contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Config;
use crate::logging::LogLevel;

#[test]
fn test_default_config() {
    let config = Config::parse("").expect("empty config should parse");
    assert_eq!(config.global.log_level, LogLevel::INFO);
    assert!(config.global.file_log_level.is_none());
    assert!(config.global.log_file.is_none());
    assert_eq!(config.git.executable, "git");
    assert!(config.git.abbrev.is_none());
}

#[test]
fn test_parse_full_config() {
    let config = Config::parse(
        r#"
        [global]
        log_level = 4
        log_file = "out/gitscope.log"

        [git]
        executable = "/usr/local/bin/git"
        abbrev = 10
        "#,
    )
    .expect("config should parse");

    assert_eq!(config.global.log_level, LogLevel::DEBUG);
    assert_eq!(
        config.global.log_file.as_deref(),
        Some(std::path::Path::new("out/gitscope.log"))
    );
    assert_eq!(config.git.executable, "/usr/local/bin/git");
    assert_eq!(config.git.abbrev, Some(10));
}

#[test]
fn test_unknown_keys_rejected() {
    let result = Config::parse("[git]\nexecutble = \"git\"\n");
    assert!(result.is_err(), "typo'd key should be rejected");
}

#[test]
fn test_invalid_log_level_rejected() {
    let result = Config::parse("[global]\nlog_level = 9\n");
    assert!(result.is_err(), "log_level 9 should be rejected");
}

#[test]
fn test_abbrev_out_of_range_rejected() {
    for bad in ["abbrev = 2", "abbrev = 41"] {
        let result = Config::parse(&format!("[git]\n{bad}\n"));
        assert!(result.is_err(), "{bad} should be rejected");
    }
    let config = Config::parse("[git]\nabbrev = 40\n").expect("abbrev 40 is valid");
    assert_eq!(config.git.abbrev, Some(40));
}

#[test]
fn test_empty_executable_rejected() {
    let result = Config::parse("[git]\nexecutable = \"  \"\n");
    assert!(result.is_err(), "blank executable should be rejected");
}

#[test]
fn test_set_override_wins_over_file() {
    let config = Config::builder()
        .add_toml_str("[git]\nabbrev = 8\n")
        .set("git.abbrev", 12_i64)
        .expect("override should apply")
        .build()
        .expect("config should build");
    assert_eq!(config.git.abbrev, Some(12));
}

#[test]
fn test_invalid_override_key() {
    let result = Config::builder().set("git..abbrev", 8_i64);
    assert!(result.is_err(), "malformed key should be rejected");
}

#[test]
fn test_missing_required_file_errors() {
    let result = Config::builder()
        .add_toml_file("/nonexistent/gitscope.toml")
        .build();
    assert!(result.is_err());
}

#[test]
fn test_missing_optional_file_ignored() {
    let config = Config::builder()
        .add_toml_file_optional("/nonexistent/gitscope.toml")
        .build()
        .expect("optional file may be absent");
    assert_eq!(config.git.executable, "git");
}

#[test]
fn test_format_options_deterministic() {
    let config = Config::parse("[git]\nabbrev = 7\n").expect("config should parse");
    let options = config.format_options();

    // BTreeMap ordering: git.* before global.*
    assert_eq!(options.len(), 5);
    assert_eq!(options[0].trim_end(), "git.abbrev            = 7");
    assert_eq!(options[1].trim_end(), "git.executable        = git");
    // file_log_level falls back to log_level
    assert_eq!(options[2].trim_end(), "global.file_log_level = 3");
    assert_eq!(options[3].trim_end(), "global.log_file       =");
    assert_eq!(options[4].trim_end(), "global.log_level      = 3");
}
