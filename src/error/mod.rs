// gitscope: git repository inspection via the git CLI
//
// SPDX-FileCopyrightText: 2026 gitscope contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            ScopeError (~24 bytes)
//!                  |
//!     +------+-----+-----+------+
//!     v      v     v     v      v
//!    Git   Config Proc   Io   Other
//!    Box    Box   Box   Box  Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Git     NotARepository, CommandFailed, RevisionNotFound,
//!           InvalidRevspec, InvalidOutput
//!   Config  ParseError, InvalidValue, NotFound
//!   Process ExecutableNotFound, SpawnFailed
//!
//! All variants boxed => ScopeError fits in 24 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`ScopeError`].
pub type ScopeResult<T> = std::result::Result<T, ScopeError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum ScopeError {
    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

impl ScopeError {
    /// Create a generic [`ScopeError::Other`] from a message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into().into_boxed_str())
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for ScopeError {
                fn from(err: $error) -> Self {
                    ScopeError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    ConfigError => Config,
    ProcessError => Process,
    std::io::Error => Io,
}

// --- Git Errors ---

/// Git operation errors.
///
/// Any non-zero exit status from the git binary is fatal and surfaces as
/// [`GitError::CommandFailed`]; there is no retry layer.
#[derive(Debug, Error)]
pub enum GitError {
    /// The given directory is not inside a git work tree.
    #[error("not a git repository: {path}")]
    NotARepository { path: String },

    /// Git command exited with a non-zero status.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// A branch, tag, or commit could not be resolved.
    #[error("unknown revision: {revspec}")]
    RevisionNotFound { revspec: String },

    /// A revision argument failed the well-formedness check.
    #[error("invalid revision specifier: {revspec}")]
    InvalidRevspec { revspec: String },

    /// Git produced output the parser could not make sense of.
    #[error("unexpected output from {command}: {message}")]
    InvalidOutput { command: String, message: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests;
