// korg-rs: Kubernetes Org Membership Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Record a set of changed files as one commit.
//!
//! ```text
//! open_worktree(root) --> stage(path) for each path --> commit(message)
//!                     --> head_commit()
//! ```
//!
//! Not transactional: if staging fails halfway, the paths staged so far
//! stay staged and nothing is committed.

use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::cmd::{commit, head_commit, stage};
use super::query::open_worktree;
use crate::error::Result;

/// Stage `paths` (relative to `repo_root`) in order and commit them once.
///
/// Returns the id of the new commit.
///
/// # Errors
///
/// Returns an error if:
/// - `repo_root` is not the root of a repository with a work tree
/// - any path cannot be staged
/// - git refuses the commit (e.g. nothing changed)
pub fn commit_changes(repo_root: &Path, paths: &[PathBuf], message: &str) -> Result<String> {
    open_worktree(repo_root).context("unable to open repository")?;

    for path in paths {
        debug!(path = %path.display(), "staging");
        stage(repo_root, path).context("unable to stage changes")?;
    }

    commit(repo_root, message)?;
    let id = head_commit(repo_root)?;
    info!(commit = %id, files = paths.len(), "committed changes");
    Ok(id)
}
