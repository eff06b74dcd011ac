// korg-rs: Kubernetes Org Membership Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Reading, writing and merging membership documents.
//!
//! ```text
//! config/<org>/
//!   org.yaml            read / write
//!   README.md           ignored (file next to org.yaml)
//!   sig-foo/
//!     teams.yaml        merged into org.yaml `teams`
//!     nested/           skipped, logged (too deep)
//! ```
//!
//! Output keys are sorted alphabetically at every level so rewritten files
//! keep the layout the rest of the org tooling produces.

use ignore::WalkBuilder;
use serde_yaml::{Mapping, Value};
use std::path::Path;
use tracing::{debug, info};

use super::OrgRepo;
use super::types::OrgConfig;
use crate::error::{KorgResult, StoreError};

/// Parse a membership document. An empty document is an empty config.
///
/// # Errors
///
/// Returns `StoreError::Parse` if the content is not valid YAML or does not
/// have the membership document shape.
pub fn parse(content: &str, path: &Path) -> KorgResult<OrgConfig> {
    if content.trim().is_empty() {
        return Ok(OrgConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| StoreError::parse(path, e).into())
}

/// Serialize a document with alphabetically sorted keys.
///
/// # Errors
///
/// Returns the serializer error if the document cannot be represented.
pub fn to_yaml(config: &OrgConfig) -> Result<String, serde_yaml::Error> {
    let mut value = serde_yaml::to_value(config)?;
    sort_keys(&mut value);
    serde_yaml::to_string(&value)
}

fn sort_keys(value: &mut Value) {
    match value {
        Value::Mapping(mapping) => {
            let mut entries: Vec<(Value, Value)> = std::mem::take(mapping).into_iter().collect();
            entries.sort_by(|(a, _), (b, _)| key_text(a).cmp(&key_text(b)));
            *mapping = entries
                .into_iter()
                .map(|(k, mut v)| {
                    sort_keys(&mut v);
                    (k, v)
                })
                .collect::<Mapping>();
        }
        Value::Sequence(items) => items.iter_mut().for_each(sort_keys),
        Value::Tagged(tagged) => sort_keys(&mut tagged.value),
        _ => {}
    }
}

fn key_text(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other).unwrap_or_default(),
    }
}

/// Load a membership document from disk.
///
/// # Errors
///
/// Returns `StoreError::Read` if the file cannot be read and
/// `StoreError::Parse` if its content is not a membership document.
pub fn read(path: &Path) -> KorgResult<OrgConfig> {
    debug!(path = %path.display(), "reading config");
    let content = std::fs::read_to_string(path).map_err(|e| StoreError::read(path, e))?;
    parse(&content, path)
}

/// Write a document back over an existing file, keeping its permission bits.
///
/// # Errors
///
/// Returns `StoreError::Metadata` if the file does not exist or its metadata
/// cannot be read (korg never creates config files), `StoreError::Serialize`
/// if the document cannot be serialized and `StoreError::Write` if writing
/// or restoring permissions fails.
pub fn write(path: &Path, config: &OrgConfig) -> KorgResult<()> {
    let display = || path.display().to_string();

    let metadata = std::fs::metadata(path).map_err(|source| StoreError::Metadata {
        path: display(),
        source,
    })?;
    let content = to_yaml(config).map_err(|source| StoreError::Serialize {
        path: display(),
        source,
    })?;

    debug!(path = %path.display(), bytes = content.len(), "writing config");
    std::fs::write(path, content).map_err(|source| StoreError::Write {
        path: display(),
        source,
    })?;
    std::fs::set_permissions(path, metadata.permissions()).map_err(|source| {
        StoreError::Write {
            path: display(),
            source,
        }
    })?;
    Ok(())
}

/// Read an org config and fold in every `<org dir>/<group>/<teams_file>`.
///
/// Subdirectories are visited in file-name order; a team defined in a later
/// file replaces one of the same name from an earlier file or from the org
/// config itself. Only one directory level below the org config is searched.
///
/// # Errors
///
/// Returns the read/parse error of the first failing file, or
/// `StoreError::Walk` if the directory cannot be traversed.
pub fn merge_teams(org_config_path: &Path, teams_file: &str) -> KorgResult<OrgConfig> {
    let mut config = read(org_config_path)?;
    let prefix = org_config_path.parent().unwrap_or_else(|| Path::new("."));

    let walker = WalkBuilder::new(prefix)
        .standard_filters(false)
        .max_depth(Some(2))
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    for entry in walker {
        let entry = entry.map_err(|e| StoreError::Walk {
            path: org_config_path.display().to_string(),
            message: e.to_string(),
        })?;

        // depth 0 is the org dir itself; depth 1 files sit next to org.yaml
        if entry.depth() < 2 {
            continue;
        }

        let path = entry.path();
        if entry.file_type().is_some_and(|t| t.is_dir()) {
            info!(path = %path.display(), "skipping directory and its children");
            continue;
        }
        if entry.file_name() != teams_file {
            continue;
        }

        let team_config = read(path)?;
        debug!(
            path = %path.display(),
            teams = team_config.teams.len(),
            "merging nested teams"
        );
        config.teams.extend(team_config.teams);
    }

    Ok(config)
}

/// Load `<config_dir>/<org>/<org_file>` from a checkout.
///
/// With `merge` set, nested team files are folded in (see [`merge_teams`]);
/// otherwise `teams` is cleared so callers never see a partial team list.
///
/// # Errors
///
/// Returns the read, parse or walk error of the first failing file.
pub fn load_org(repo: &OrgRepo, org: &str, merge: bool) -> KorgResult<OrgConfig> {
    let path = repo.absolute(&repo.layout().org_config_path(org));
    if merge {
        merge_teams(&path, &repo.layout().teams_file)
    } else {
        let mut config = read(&path)?;
        config.teams.clear();
        Ok(config)
    }
}
