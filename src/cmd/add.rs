// korg-rs: Kubernetes Org Membership Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Add command implementation.

use crate::cli::member::MemberArgs;
use crate::error::Result;
use crate::org::OrgRepo;
use crate::org::ops::{AddOutcome, add};

/// Printed before any mutating command runs without `--confirm`.
pub const DRY_RUN_BANNER: &str = "!!! running in dry-run mode. pass --confirm to persist changes.";

/// Main handler for add command.
///
/// # Errors
///
/// Returns an error if any target is rejected, or if writing or committing
/// the changes fails.
pub fn run_add_command(args: &MemberArgs, repo: &OrgRepo, confirm: bool) -> Result<()> {
    let outcome = add(repo, &args.username, &args.orgs, &args.teams, confirm)?;
    print!("{}", render_outcome(&outcome));
    Ok(())
}

/// One line per touched file, plus the commit id when one was made.
#[must_use]
pub fn render_outcome(outcome: &AddOutcome) -> String {
    let verb = if outcome.is_dry_run() {
        "would update"
    } else {
        "updated"
    };
    let mut lines: Vec<String> = outcome
        .modified()
        .iter()
        .map(|path| format!("{verb} {}", path.display()))
        .collect();
    if let AddOutcome::Committed { commit, .. } = outcome {
        lines.push(format!("committed {commit}"));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
