// korg-rs: Kubernetes Org Membership Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Org and team membership.
//!
//! ```text
//!            ops (add to orgs / teams)
//!           /      |         \
//!          v       v          v
//!     validate   plan     git::commit
//!                  |
//!          +-------+--------+
//!          v                v
//!       store           membership
//!   read/write/merge    add/contains/sort
//!          |
//!          v
//!       types (OrgConfig, TeamConfig)
//! ```

pub mod membership;
pub mod ops;
pub mod plan;
pub mod store;
pub mod types;
pub mod validate;


use bon::Builder;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::config::types::LayoutSettings;
use validate::OrgAllowList;

/// A local checkout of the org repo and the rules for editing it.
#[derive(Debug, Clone, Builder)]
pub struct OrgRepo {
    #[builder(setters(name = with_root), into)]
    root: PathBuf,
    #[builder(setters(name = with_layout), default)]
    layout: LayoutSettings,
    #[builder(setters(name = with_allowed), default)]
    allowed: OrgAllowList,
}

impl OrgRepo {
    /// Build from loaded settings.
    #[must_use]
    pub fn from_settings(root: impl Into<PathBuf>, settings: &Settings) -> Self {
        Self::builder()
            .with_root(root)
            .with_layout(settings.layout.clone())
            .with_allowed(settings.allow_list())
            .build()
    }

    /// Root of the checkout.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub const fn layout(&self) -> &LayoutSettings {
        &self.layout
    }

    #[must_use]
    pub const fn allowed(&self) -> &OrgAllowList {
        &self.allowed
    }

    /// Resolve a checkout-relative path.
    #[must_use]
    pub fn absolute(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }
}
