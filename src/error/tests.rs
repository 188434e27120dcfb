// gitscope: git repository inspection via the git CLI
//
// SPDX-FileCopyrightText: 2026 gitscope contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, GitError, ScopeError, ScopeResult};

#[test]
fn test_git_error_display() {
    let err = GitError::NotARepository {
        path: "/tmp/not-a-repo".to_string(),
    };
    insta::assert_snapshot!("git_error_display", err.to_string());
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "git".to_string(),
        key: "abbrev".to_string(),
        message: "abbrev must be 4-40, got 2".to_string(),
    };
    insta::assert_snapshot!("config_error_display", err.to_string());
}

#[test]
fn test_config_error_variants_display() {
    let parse = ConfigError::ParseError {
        path: "gitscope.toml".to_string(),
        message: "expected value".to_string(),
    };
    assert_eq!(
        parse.to_string(),
        "failed to parse config file 'gitscope.toml': expected value"
    );

    let missing = ConfigError::NotFound("extra.toml".to_string());
    assert_eq!(missing.to_string(), "config file not found: extra.toml");
}

#[test]
fn test_command_failed_carries_stderr() {
    let err = GitError::CommandFailed {
        command: "git rev-parse HEAD".to_string(),
        message: "fatal: bad revision 'HEAD'".to_string(),
    };
    let display = err.to_string();
    assert!(display.contains("git rev-parse HEAD"));
    assert!(display.contains("fatal: bad revision"));
}

#[test]
fn test_scope_error_size() {
    // ScopeError should be reasonably small
    // Box<str> variant (Other) is 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<ScopeError>();
    assert!(size <= 24, "ScopeError is {size} bytes, expected <= 24");
}

#[test]
fn test_scope_result_size() {
    // Result<(), ScopeError> should be reasonably small
    let size = std::mem::size_of::<ScopeResult<()>>();
    assert!(size <= 24, "ScopeResult<()> is {size} bytes, expected <= 24");
}

#[test]
fn test_boxing_from_impls() {
    let err: ScopeError = GitError::RevisionNotFound {
        revspec: "no-such-branch".to_string(),
    }
    .into();
    assert!(matches!(err, ScopeError::Git(_)));

    let err: ScopeError = std::io::Error::other("boom").into();
    assert!(matches!(err, ScopeError::Io(_)));
}
