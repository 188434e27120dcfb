// gitscope: git repository inspection via the git CLI
//
// SPDX-FileCopyrightText: 2026 gitscope contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for gitscope.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. gitscope.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. GITSCOPE_* env vars
//! 5. --set KEY=VAL / CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! GITSCOPE_GLOBAL__LOG_LEVEL=4   → global.log_level = 4
//! GITSCOPE_GIT__EXECUTABLE=git2  → git.executable = "git2"
//! ```

pub mod loader;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::logging::LogLevel;

use loader::ConfigLoader;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalSection,
    /// Git invocation options.
    pub git: GitSection,
}

/// Global options shared by all commands.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalSection {
    /// Console log level (0-5).
    pub log_level: LogLevel,
    /// File log level; falls back to `log_level` when unset.
    pub file_log_level: Option<LogLevel>,
    /// Path to a log file; no file logging when unset.
    pub log_file: Option<PathBuf>,
}

/// Options controlling how the git binary is invoked.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitSection {
    /// Name or path of the git executable.
    pub executable: String,
    /// Abbreviation width for short commit ids (4-40).
    /// When unset, git's own `--short` default applies.
    pub abbrev: Option<u32>,
}

impl Default for GitSection {
    fn default() -> Self {
        Self {
            executable: "git".to_string(),
            abbrev: None,
        }
    }
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gitscope::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("gitscope.toml")
    ///     .with_env_prefix("GITSCOPE")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate configuration values after merging all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if the git executable is empty or `abbrev` is outside
    /// the 4-40 range git accepts.
    pub fn resolve_and_validate(&mut self) -> Result<()> {
        if self.git.executable.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "git".to_string(),
                key: "executable".to_string(),
                message: "executable must not be empty".to_string(),
            }
            .into());
        }

        if let Some(abbrev) = self.git.abbrev
            && !(4..=40).contains(&abbrev)
        {
            return Err(ConfigError::InvalidValue {
                section: "git".to_string(),
                key: "abbrev".to_string(),
                message: format!("abbrev must be 4-40, got {abbrev}"),
            }
            .into());
        }

        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Returns a vector of formatted strings representing all configuration
    /// options. Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_git_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.log_level".into(),
            self.global.log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global
                .file_log_level
                .unwrap_or(self.global.log_level)
                .as_u8()
                .to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
    }

    fn format_git_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("git.executable".into(), self.git.executable.clone());
        options.insert(
            "git.abbrev".into(),
            self.git
                .abbrev
                .map_or_else(|| "(git default)".to_string(), |n| n.to_string()),
        );
    }
}
