// korg-rs: Kubernetes Org Membership Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git command operations using shell backend.
//!
//! ```text
//! cmd.rs --> ShellBackend --> git (index, commit)
//! ```

use crate::error::KorgResult;
use std::path::Path;

use super::backend::{GitMutation, ShellBackend};

/// Stage a work-tree-relative path.
///
/// # Errors
///
/// Returns `GitError::StageFailed` if git rejects the path.
pub fn stage(repo_path: &Path, file: &Path) -> KorgResult<()> {
    ShellBackend::stage(repo_path, file)
}

/// Commit whatever is staged.
///
/// # Errors
///
/// Returns `GitError::CommitFailed` if git refuses the commit.
pub fn commit(repo_path: &Path, message: &str) -> KorgResult<()> {
    ShellBackend::commit(repo_path, message)
}

/// Id of the current HEAD commit.
///
/// # Errors
///
/// Returns a `GitError` if HEAD does not resolve.
pub fn head_commit(repo_path: &Path) -> KorgResult<String> {
    ShellBackend::head_commit(repo_path)
}
