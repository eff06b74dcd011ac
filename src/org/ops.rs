// korg-rs: Kubernetes Org Membership Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Add a user to orgs and teams.
//!
//! ```text
//! add(user, orgs, teams, confirm)
//!   1. validate   username, org allow-list, team paths
//!   2. plan       per target: load → check → mutate (ChangeSet)
//!   3. confirm?   no  → DryRun { modified }
//!                 yes → persist → commit_changes → Committed
//! ```
//!
//! A team addition requires org membership. The check reads the planned
//! state, so `--org kubernetes --team kubernetes/foo` works in one go.

use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::info;

use super::OrgRepo;
use super::membership::{add_member, contains_member};
use super::plan::ChangeSet;
use super::types::OrgConfig;
use super::validate::{TeamSpec, parse_team_path, validate_orgs, validate_username};
use crate::error::{KorgError, KorgResult, Result, ValidationError};
use crate::git::commit::commit_changes;

/// What an add operation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Checks passed; nothing was written.
    DryRun { modified: Vec<PathBuf> },
    /// Files were written and committed.
    Committed {
        modified: Vec<PathBuf>,
        commit: String,
    },
}

impl AddOutcome {
    /// Checkout-relative paths that were (or would be) changed.
    #[must_use]
    pub fn modified(&self) -> &[PathBuf] {
        match self {
            Self::DryRun { modified } | Self::Committed { modified, .. } => modified,
        }
    }

    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        matches!(self, Self::DryRun { .. })
    }
}

/// Add `username` to each org in `orgs`.
///
/// # Errors
///
/// See [`add`].
pub fn add_to_orgs(
    repo: &OrgRepo,
    username: &str,
    orgs: &[String],
    confirm: bool,
) -> Result<AddOutcome> {
    add(repo, username, orgs, &[], confirm)
}

/// Add `username` to each team in `teams` (`org/team` or `org/group/team`).
///
/// # Errors
///
/// See [`add`].
pub fn add_to_teams(
    repo: &OrgRepo,
    username: &str,
    teams: &[String],
    confirm: bool,
) -> Result<AddOutcome> {
    add(repo, username, &[], teams, confirm)
}

/// Add `username` to orgs, then teams, and commit once.
///
/// Without `confirm` every check still runs but no file is written and no
/// commit is made.
///
/// # Errors
///
/// Returns an error if any target fails validation (nothing is written in
/// that case), if a file cannot be written, or if committing fails.
pub fn add(
    repo: &OrgRepo,
    username: &str,
    orgs: &[String],
    teams: &[String],
    confirm: bool,
) -> Result<AddOutcome> {
    let changes = plan_additions(repo, username, orgs, teams)?;
    let modified = changes.modified_paths();

    if !confirm {
        info!(user = username, files = modified.len(), "dry run, not saving");
        return Ok(AddOutcome::DryRun { modified });
    }

    for path in &modified {
        info!(path = %path.display(), "saving config");
    }
    changes.persist(repo).context("saving config")?;

    let message = commit_message(username, orgs, teams);
    let commit = commit_changes(repo.root(), &modified, &message).context("committing changes")?;

    Ok(AddOutcome::Committed { modified, commit })
}

/// Run every check and build the in-memory result without touching disk.
///
/// # Errors
///
/// Returns the first validation or read error.
pub fn plan_additions(
    repo: &OrgRepo,
    username: &str,
    orgs: &[String],
    teams: &[String],
) -> Result<ChangeSet> {
    validate_username(username)?;
    if orgs.is_empty() && teams.is_empty() {
        return Err(KorgError::from(ValidationError::NoTargets).into());
    }

    validate_orgs(repo.allowed(), orgs).into_result()?;
    let specs = teams
        .iter()
        .map(|t| parse_team_path(repo.allowed(), t))
        .collect::<KorgResult<Vec<_>>>()?;

    let mut changes = ChangeSet::new();
    for org in orgs {
        plan_org_addition(repo, &mut changes, username, org)
            .with_context(|| format!("adding {username} to org {org}"))?;
    }
    for spec in &specs {
        plan_team_addition(repo, &mut changes, username, spec)
            .with_context(|| format!("adding {username} to team {spec}"))?;
    }
    Ok(changes)
}

/// `add alice to kubernetes, kubernetes-sigs/foo`
#[must_use]
pub fn commit_message(username: &str, orgs: &[String], teams: &[String]) -> String {
    let targets: Vec<&str> = orgs.iter().chain(teams).map(String::as_str).collect();
    format!("add {username} to {}", targets.join(", "))
}

fn is_org_member(config: &OrgConfig, username: &str) -> bool {
    contains_member(&config.members, username) || contains_member(&config.admins, username)
}

fn plan_org_addition(
    repo: &OrgRepo,
    changes: &mut ChangeSet,
    username: &str,
    org: &str,
) -> KorgResult<()> {
    let relative = repo.layout().org_config_path(org);
    let config = changes.document(repo, &relative)?;

    // an admin is already an org member
    if contains_member(&config.admins, username) {
        return Err(ValidationError::AlreadyMember {
            username: username.to_string(),
        }
        .into());
    }
    add_member(&mut config.members, username)?;

    info!(user = username, org, "adding user to org");
    changes.mark_modified(&relative);
    Ok(())
}

fn plan_team_addition(
    repo: &OrgRepo,
    changes: &mut ChangeSet,
    username: &str,
    spec: &TeamSpec,
) -> KorgResult<()> {
    let org_path = repo.layout().org_config_path(&spec.org);
    if !is_org_member(changes.document(repo, &org_path)?, username) {
        return Err(ValidationError::NotOrgMember {
            username: username.to_string(),
            org: spec.org.clone(),
        }
        .into());
    }

    let relative = match &spec.group {
        Some(group) => repo.layout().team_config_path(&spec.org, group),
        None => org_path,
    };
    let config = changes.document(repo, &relative)?;
    let team = config
        .teams
        .get_mut(&spec.team)
        .ok_or_else(|| unknown_team(&spec.team, &relative))?;

    // maintainers count as team members too
    if contains_member(&team.maintainers, username) {
        return Err(ValidationError::AlreadyMember {
            username: username.to_string(),
        }
        .into());
    }
    add_member(&mut team.members, username)?;

    info!(user = username, org = %spec.org, team = %spec.team, "adding user to team");
    changes.mark_modified(&relative);
    Ok(())
}

fn unknown_team(team: &str, path: &Path) -> ValidationError {
    ValidationError::UnknownTeam {
        team: team.to_string(),
        path: path.display().to_string(),
    }
}
