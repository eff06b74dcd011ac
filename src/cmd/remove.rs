// korg-rs: Kubernetes Org Membership Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remove command. Only the surface exists so far.

use crate::cli::member::MemberArgs;
use crate::error::{Result, not_implemented};
use tracing::debug;

/// Main handler for remove command.
///
/// # Errors
///
/// Always returns `KorgError::NotImplemented`; nothing is read or written.
pub fn run_remove_command(args: &MemberArgs) -> Result<()> {
    debug!(user = %args.username, "remove requested");
    Err(not_implemented("remove").into())
}
