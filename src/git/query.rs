// korg-rs: Kubernetes Org Membership Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git query operations using gix backend.
//!
//! ```text
//! query.rs --> GixBackend --> .git/ (no subprocess)
//! ```

use crate::error::KorgResult;
use std::path::{Path, PathBuf};

use super::backend::{GitQuery, GixBackend};

/// Open the repository rooted at `path` and return its work tree.
///
/// # Errors
///
/// Returns a `GitError` if `path` is not the root of a non-bare repository.
pub fn open_worktree(path: &Path) -> KorgResult<PathBuf> {
    GixBackend::open_worktree(path)
}
