// gitscope: git repository inspection via the git CLI
//
// SPDX-FileCopyrightText: 2026 gitscope contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! GitQuery (read)     --> ShellBackend (git CLI)
//! GitMutation (write) --> ShellBackend (git CLI)
//! ```
//!
//! The installed git binary is the only source of repository knowledge.
//! Every trait call spawns exactly one synchronous subprocess; a non-zero
//! exit status is fatal and surfaces as [`GitError::CommandFailed`].

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{OnceLock, RwLock};

use regex::Regex;
use tracing::trace;

use crate::error::{GitError, ProcessError, ScopeError, ScopeResult};

use super::status::{StatusEntry, parse_porcelain};

/// Static cache for executable paths resolved via `which`.
static EXECUTABLE_CACHE: OnceLock<RwLock<BTreeMap<String, PathBuf>>> = OnceLock::new();

/// Get the executable cache, initializing if needed.
fn exe_cache() -> &'static RwLock<BTreeMap<String, PathBuf>> {
    EXECUTABLE_CACHE.get_or_init(|| RwLock::new(BTreeMap::new()))
}

/// Resolve an executable name (or path) through `PATH`, with caching.
fn resolve_executable(name: &str) -> ScopeResult<PathBuf> {
    if let Ok(cache) = exe_cache().read()
        && let Some(hit) = cache.get(name)
    {
        return Ok(hit.clone());
    }

    let path = which::which(name).map_err(|_| ProcessError::ExecutableNotFound {
        name: name.to_string(),
    })?;

    if let Ok(mut cache) = exe_cache().write() {
        cache.insert(name.to_string(), path.clone());
    }
    Ok(path)
}

/// Well-formedness check for user-supplied revision specifiers.
///
/// Rejects anything that could be mistaken for an option (leading `-`)
/// before it reaches the git command line.
fn check_revspec(revspec: &str) -> ScopeResult<()> {
    static REVSPEC_RE: OnceLock<std::result::Result<Regex, regex::Error>> = OnceLock::new();

    let re = REVSPEC_RE
        .get_or_init(|| Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9._/@^~{}-]*$"))
        .as_ref()
        .map_err(|e| ScopeError::other(format!("failed to compile revspec pattern: {e}")))?;

    if re.is_match(revspec) {
        Ok(())
    } else {
        Err(GitError::InvalidRevspec {
            revspec: revspec.to_string(),
        }
        .into())
    }
}

// --- Query Trait (Read-only operations) ---

/// Read-only git query operations.
///
/// Implementors provide methods to inspect repository state without
/// modification.
pub trait GitQuery {
    /// Check if path is inside a git work tree.
    fn is_work_tree(&self, path: &Path) -> bool;

    /// Get current branch name (None if HEAD is detached).
    ///
    /// Works on an unborn branch: a freshly initialized repository reports
    /// its default branch even before the first commit.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the git invocation itself cannot be spawned.
    fn current_branch(&self, path: &Path) -> ScopeResult<Option<String>>;

    /// List local branch names.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the branch listing fails.
    fn branch_names(&self, path: &Path) -> ScopeResult<BTreeSet<String>>;

    /// Resolve a revision to its abbreviated commit id.
    ///
    /// `abbrev` overrides git's default abbreviation width when set.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RevisionNotFound` for an unknown revision and
    /// `GitError::InvalidRevspec` for a malformed one.
    fn resolve_short(&self, path: &Path, revspec: &str, abbrev: Option<u32>)
    -> ScopeResult<String>;

    /// Parsed working-tree status entries (staged, unstaged, untracked).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the status check fails.
    fn status_entries(&self, path: &Path) -> ScopeResult<Vec<StatusEntry>>;

    /// Tags pointing at exactly the given commit. Empty set when none do.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RevisionNotFound` for an unknown revision.
    fn tags_at(&self, path: &Path, revspec: &str) -> ScopeResult<BTreeSet<String>>;
}

// --- Mutation Trait (Write operations) ---

/// Git mutation operations that modify repository state.
pub trait GitMutation {
    /// Initialize a new repository in an existing directory.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository initialization fails.
    fn init_repo(&self, path: &Path) -> ScopeResult<()>;

    /// Stage all changes in the work tree.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if staging fails.
    fn add_all(&self, path: &Path) -> ScopeResult<()>;

    /// Record a commit with the given message.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the commit fails (e.g. nothing staged, or no
    /// committer identity configured).
    fn commit(&self, path: &Path, message: &str) -> ScopeResult<()>;

    /// Create an annotated tag at HEAD.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the tag cannot be created.
    fn tag(&self, path: &Path, name: &str, message: &str) -> ScopeResult<()>;

    /// Checkout a branch, tag, or commit.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the checkout fails.
    fn checkout(&self, path: &Path, what: &str) -> ScopeResult<()>;

    /// Create a new branch at HEAD and switch to it.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the branch cannot be created.
    fn checkout_new_branch(&self, path: &Path, name: &str) -> ScopeResult<()>;

    /// Set a repository-local git config value.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the config value cannot be set.
    fn set_config(&self, path: &Path, key: &str, value: &str) -> ScopeResult<()>;
}

// --- ShellBackend Implementation (Git CLI) ---

/// Shell-based git backend using the installed git CLI.
///
/// Holds the resolved executable path; construction fails fast when the
/// binary cannot be found.
#[derive(Debug, Clone)]
pub struct ShellBackend {
    executable: PathBuf,
}

impl ShellBackend {
    /// Create a backend around the given executable name or path.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::ExecutableNotFound` when the binary is not on
    /// `PATH` (or the given path does not exist).
    pub fn new(executable: &str) -> ScopeResult<Self> {
        Ok(Self {
            executable: resolve_executable(executable)?,
        })
    }

    /// Execute a git command and return raw (untrimmed) stdout.
    /// ALWAYS sets `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0`.
    pub(crate) fn git_command_raw(&self, args: &[&str], cwd: &Path) -> ScopeResult<String> {
        trace!(cwd = %cwd.display(), ?args, "git");

        let output = Command::new(&self.executable)
            .args(args)
            .current_dir(cwd)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .map_err(|e| ProcessError::SpawnFailed {
                command: format!("git {}", args.join(" ")),
                source: e,
            })?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: format!("git {}", args.join(" ")),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Execute a git command and return trimmed stdout.
    pub(crate) fn git_command(&self, args: &[&str], cwd: &Path) -> ScopeResult<String> {
        Ok(self.git_command_raw(args, cwd)?.trim().to_string())
    }
}

impl GitQuery for ShellBackend {
    fn is_work_tree(&self, path: &Path) -> bool {
        // Prints "false" (exit 0) inside .git itself, hence the output check.
        self.git_command(&["rev-parse", "--is-inside-work-tree"], path)
            .is_ok_and(|out| out == "true")
    }

    fn current_branch(&self, path: &Path) -> ScopeResult<Option<String>> {
        // symbolic-ref fails on a detached HEAD; that failure is the answer.
        self.git_command(&["symbolic-ref", "--short", "HEAD"], path)
            .map_or_else(|_| Ok(None), |branch| Ok(Some(branch)))
    }

    fn branch_names(&self, path: &Path) -> ScopeResult<BTreeSet<String>> {
        let output = self.git_command(&["branch", "--list", "--format=%(refname:short)"], path)?;
        Ok(output
            .lines()
            .map(str::trim)
            // A detached HEAD shows up as a "(...)" pseudo-entry.
            .filter(|line| !line.is_empty() && !line.starts_with('('))
            .map(String::from)
            .collect())
    }

    fn resolve_short(
        &self,
        path: &Path,
        revspec: &str,
        abbrev: Option<u32>,
    ) -> ScopeResult<String> {
        check_revspec(revspec)?;

        let short_arg = abbrev.map_or_else(|| "--short".to_string(), |n| format!("--short={n}"));
        let target = format!("{revspec}^{{commit}}");

        let result = self.git_command(
            &["rev-parse", "--verify", "--quiet", &short_arg, &target],
            path,
        );

        match result {
            Ok(commit) if commit.is_empty() => Err(GitError::InvalidOutput {
                command: format!("git rev-parse --verify {revspec}"),
                message: "empty commit id".to_string(),
            }
            .into()),
            Ok(commit) => Ok(commit),
            Err(ScopeError::Git(e)) if matches!(&*e, GitError::CommandFailed { .. }) => {
                Err(GitError::RevisionNotFound {
                    revspec: revspec.to_string(),
                }
                .into())
            }
            Err(e) => Err(e),
        }
    }

    fn status_entries(&self, path: &Path) -> ScopeResult<Vec<StatusEntry>> {
        // Raw output: the first column of a porcelain line may be a space.
        let output = self.git_command_raw(&["status", "--porcelain"], path)?;
        Ok(parse_porcelain(&output))
    }

    fn tags_at(&self, path: &Path, revspec: &str) -> ScopeResult<BTreeSet<String>> {
        check_revspec(revspec)?;

        let result = self.git_command(&["tag", "--points-at", revspec], path);
        match result {
            Ok(output) => Ok(output
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect()),
            Err(ScopeError::Git(e)) if matches!(&*e, GitError::CommandFailed { .. }) => {
                Err(GitError::RevisionNotFound {
                    revspec: revspec.to_string(),
                }
                .into())
            }
            Err(e) => Err(e),
        }
    }
}

impl GitMutation for ShellBackend {
    fn init_repo(&self, path: &Path) -> ScopeResult<()> {
        self.git_command(&["init", "--quiet"], path)?;
        Ok(())
    }

    fn add_all(&self, path: &Path) -> ScopeResult<()> {
        self.git_command(&["add", "."], path)?;
        Ok(())
    }

    fn commit(&self, path: &Path, message: &str) -> ScopeResult<()> {
        self.git_command(&["commit", "--quiet", "-m", message], path)?;
        Ok(())
    }

    fn tag(&self, path: &Path, name: &str, message: &str) -> ScopeResult<()> {
        self.git_command(&["tag", "-a", name, "-m", message], path)?;
        Ok(())
    }

    fn checkout(&self, path: &Path, what: &str) -> ScopeResult<()> {
        self.git_command(
            &["-c", "advice.detachedHead=false", "checkout", "-q", what],
            path,
        )?;
        Ok(())
    }

    fn checkout_new_branch(&self, path: &Path, name: &str) -> ScopeResult<()> {
        self.git_command(&["checkout", "-q", "-b", name], path)?;
        Ok(())
    }

    fn set_config(&self, path: &Path, key: &str, value: &str) -> ScopeResult<()> {
        self.git_command(&["config", key, value], path)?;
        Ok(())
    }
}
