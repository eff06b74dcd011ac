// korg-rs: Kubernetes Org Membership Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Input validation: org allow-list, team paths, usernames.
//!
//! ```text
//! "kubernetes/foo"          → TeamSpec { org, group: None,     team }
//! "kubernetes/sig-x/foo"    → TeamSpec { org, group: Some(..), team }
//! "kubernetes/a/b/c", "x/y" → ValidationError::InvalidTeam
//! ```

use regex::Regex;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

use crate::config::types::DEFAULT_ORGS;
use crate::error::{KorgError, KorgResult, ValidationError};

/// GitHub login: alphanumerics and inner hyphens, at most 39 chars.
static USERNAME_RE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]{0,37}[A-Za-z0-9])?$"));

/// The compiled login pattern.
///
/// # Errors
///
/// Returns `KorgError::Other` if the pattern failed to compile.
pub(crate) fn username_pattern() -> KorgResult<&'static Regex> {
    USERNAME_RE
        .as_ref()
        .map_err(|e| KorgError::Other(format!("failed to compile username regex: {e}").into()))
}

/// Set of organization names korg is allowed to edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgAllowList(BTreeSet<String>);

impl Default for OrgAllowList {
    fn default() -> Self {
        DEFAULT_ORGS.iter().map(ToString::to_string).collect()
    }
}

impl FromIterator<String> for OrgAllowList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl OrgAllowList {
    #[must_use]
    pub fn contains(&self, org: &str) -> bool {
        self.0.contains(org)
    }
}

/// Result of checking a list of org names against the allow-list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrgValidation {
    pub valid: Vec<String>,
    pub invalid: Vec<String>,
    pub invalid_present: bool,
}

impl OrgValidation {
    /// Turn the partition into an error listing every invalid name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidOrgs` if any name was rejected.
    pub fn into_result(self) -> KorgResult<Vec<String>> {
        if self.invalid_present {
            return Err(ValidationError::InvalidOrgs {
                orgs: self.invalid.join(", "),
            }
            .into());
        }
        Ok(self.valid)
    }
}

/// Partition `orgs` into allowed and unknown names, keeping input order.
#[must_use]
pub fn validate_orgs(allowed: &OrgAllowList, orgs: &[String]) -> OrgValidation {
    let (valid, invalid): (Vec<String>, Vec<String>) =
        orgs.iter().cloned().partition(|org| allowed.contains(org));
    let invalid_present = !invalid.is_empty();
    OrgValidation {
        valid,
        invalid,
        invalid_present,
    }
}

/// A parsed `org/team` or `org/group/team` path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSpec {
    pub org: String,
    /// Subdirectory holding a nested teams file.
    pub group: Option<String>,
    pub team: String,
}

impl fmt::Display for TeamSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.group {
            Some(group) => write!(f, "{}/{}/{}", self.org, group, self.team),
            None => write!(f, "{}/{}", self.org, self.team),
        }
    }
}

/// Parse a team path.
///
/// # Errors
///
/// Returns `ValidationError::InvalidTeam` unless the spec has two or three
/// non-empty `/`-separated segments and its org is allowed.
pub fn parse_team_path(allowed: &OrgAllowList, spec: &str) -> KorgResult<TeamSpec> {
    let invalid = || ValidationError::InvalidTeam {
        spec: spec.to_string(),
    };

    let parts: Vec<&str> = spec.split('/').collect();
    if !(2..=3).contains(&parts.len()) || parts.iter().any(|p| p.is_empty()) {
        return Err(invalid().into());
    }
    if !allowed.contains(parts[0]) {
        return Err(invalid().into());
    }

    let (group, team) = match parts.as_slice() {
        [_, team] => (None, *team),
        [_, group, team] => (Some((*group).to_string()), *team),
        _ => return Err(invalid().into()),
    };

    Ok(TeamSpec {
        org: parts[0].to_string(),
        group,
        team: team.to_string(),
    })
}

/// Reject names GitHub would never accept as a login.
///
/// # Errors
///
/// Returns `KorgError::Other` if the login pattern is unusable, and
/// `ValidationError::InvalidUsername` for an empty name, a name longer
/// than 39 characters, a leading/trailing hyphen, consecutive hyphens or any
/// character outside `[A-Za-z0-9-]`.
pub fn validate_username(username: &str) -> KorgResult<()> {
    if !username_pattern()?.is_match(username) || username.contains("--") {
        return Err(ValidationError::InvalidUsername {
            username: username.to_string(),
        }
        .into());
    }
    Ok(())
}
