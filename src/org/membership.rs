// korg-rs: Kubernetes Org Membership Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Case-insensitive membership lists.
//!
//! GitHub logins are case-insensitive, so `Alice` and `alice` are the same
//! user and lists are ordered by the lowercased login.

use crate::error::{KorgResult, ValidationError};

/// Check whether `username` appears in `members`, ignoring case.
#[must_use]
pub fn contains_member(members: &[String], username: &str) -> bool {
    let needle = username.to_lowercase();
    members.iter().any(|m| m.to_lowercase() == needle)
}

/// Stable sort by lowercased login.
pub fn sort_case_insensitive(members: &mut [String]) {
    members.sort_by_cached_key(|m| m.to_lowercase());
}

/// Add `username` to `members` and restore case-insensitive order.
///
/// # Errors
///
/// Returns `ValidationError::AlreadyMember` if the user is already listed
/// under any casing. `members` is left untouched in that case.
pub fn add_member(members: &mut Vec<String>, username: &str) -> KorgResult<()> {
    if contains_member(members, username) {
        return Err(ValidationError::AlreadyMember {
            username: username.to_string(),
        }
        .into());
    }

    members.push(username.to_string());
    sort_case_insensitive(members);
    Ok(())
}
