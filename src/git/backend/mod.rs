// korg-rs: Kubernetes Org Membership Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! GitQuery (read)     --> GixBackend (pure Rust gix)
//! GitMutation (write) --> ShellBackend (git CLI)
//! ```

use crate::error::{GitError, GixError, KorgResult};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

// --- Query Trait (Read-only operations) ---

/// Read-only git query operations.
pub trait GitQuery {
    /// Open the repository rooted exactly at `path` and return its work tree.
    ///
    /// Parent directories are not searched.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepoNotFound` if `path` is not a directory, and a
    /// `GitError` if it is not a repository or has no work tree.
    fn open_worktree(path: &Path) -> KorgResult<PathBuf>;
}

// --- Mutation Trait (Write operations) ---

/// Git mutation operations that modify repository state.
pub trait GitMutation {
    /// Add a work-tree-relative path to the index.
    ///
    /// # Errors
    ///
    /// Returns `GitError::StageFailed` if the path does not exist or lies
    /// outside the work tree.
    fn stage(repo_path: &Path, file: &Path) -> KorgResult<()>;

    /// Commit the index.
    ///
    /// # Errors
    ///
    /// Returns `GitError::CommitFailed` if nothing is staged or git refuses
    /// the commit.
    fn commit(repo_path: &Path, message: &str) -> KorgResult<()>;

    /// Id of the commit HEAD points at.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if HEAD cannot be resolved (e.g. no commits yet).
    fn head_commit(repo_path: &Path) -> KorgResult<String>;
}

// --- GixBackend Implementation (Pure Rust) ---

/// Pure Rust git backend using gix.
pub struct GixBackend;

impl GitQuery for GixBackend {
    fn open_worktree(path: &Path) -> KorgResult<PathBuf> {
        if !path.is_dir() {
            return Err(GitError::RepoNotFound {
                path: path.display().to_string(),
            }
            .into());
        }
        let repo = gix::open(path).map_err(|e| GitError::Gix(GixError::Open(Box::new(e))))?;
        let workdir = repo
            .workdir()
            .ok_or(GitError::Gix(GixError::BareRepository))?;
        Ok(workdir.to_path_buf())
    }
}

// --- ShellBackend Implementation (Git CLI) ---

/// Shell-based git backend using git CLI.
pub struct ShellBackend;

impl ShellBackend {
    /// Run git. Sets `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0`.
    fn run(args: &[&str], cwd: &Path) -> KorgResult<Output> {
        let output = Command::new("git")
            .args(args)
            .current_dir(cwd)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .map_err(|e| std::io::Error::new(e.kind(), format!("failed to execute git: {e}")))?;
        Ok(output)
    }

    /// Failure text of a finished git process (stderr, or stdout if empty).
    fn failure_message(output: &Output) -> String {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if stderr.is_empty() {
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        } else {
            stderr
        }
    }

    /// Execute a git command and return its trimmed stdout.
    fn git_command(args: &[&str], cwd: &Path) -> KorgResult<String> {
        let output = Self::run(args, cwd)?;
        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: format!("git {}", args.join(" ")),
                message: Self::failure_message(&output),
            }
            .into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl GitMutation for ShellBackend {
    fn stage(repo_path: &Path, file: &Path) -> KorgResult<()> {
        let file_str = file.to_str().ok_or_else(|| GitError::StageFailed {
            path: file.display().to_string(),
            message: "invalid file path".to_string(),
        })?;
        let output = Self::run(&["add", "--", file_str], repo_path)?;
        if !output.status.success() {
            return Err(GitError::StageFailed {
                path: file_str.to_string(),
                message: Self::failure_message(&output),
            }
            .into());
        }
        Ok(())
    }

    fn commit(repo_path: &Path, message: &str) -> KorgResult<()> {
        let output = Self::run(&["commit", "--quiet", "-m", message], repo_path)?;
        if !output.status.success() {
            return Err(GitError::CommitFailed {
                message: Self::failure_message(&output),
            }
            .into());
        }
        Ok(())
    }

    fn head_commit(repo_path: &Path) -> KorgResult<String> {
        Self::git_command(&["rev-parse", "HEAD"], repo_path)
    }
}
