// korg-rs: Kubernetes Org Membership Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory change buffer for one invocation.
//!
//! ```text
//! plan:   document(path) --> load once, mutate in memory
//!         mark_modified(path)
//! apply:  persist() --> store::write for each modified path
//! ```
//!
//! Nothing is written until every target has been checked, so a rejected
//! target never leaves earlier targets half-applied.

use std::path::{Path, PathBuf};

use super::OrgRepo;
use super::store;
use super::types::OrgConfig;
use crate::error::KorgResult;

#[derive(Debug)]
struct Document {
    relative: PathBuf,
    config: OrgConfig,
}

/// Documents loaded during planning, plus which of them were changed.
#[derive(Debug, Default)]
pub struct ChangeSet {
    documents: Vec<Document>,
    /// Indices into `documents`, in order of first modification.
    modified: Vec<usize>,
}

impl ChangeSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, relative: &Path) -> Option<usize> {
        self.documents.iter().position(|d| d.relative == relative)
    }

    /// Get the in-memory copy of a document, reading it on first access.
    ///
    /// # Errors
    ///
    /// Returns the store error if the document has to be read and cannot be.
    pub fn document(&mut self, repo: &OrgRepo, relative: &Path) -> KorgResult<&mut OrgConfig> {
        let index = match self.position(relative) {
            Some(index) => index,
            None => {
                let config = store::read(&repo.absolute(relative))?;
                self.documents.push(Document {
                    relative: relative.to_path_buf(),
                    config,
                });
                self.documents.len() - 1
            }
        };
        Ok(&mut self.documents[index].config)
    }

    /// Record that the document at `relative` must be written back.
    ///
    /// Paths never loaded through [`ChangeSet::document`] are ignored.
    pub fn mark_modified(&mut self, relative: &Path) {
        if let Some(index) = self.position(relative)
            && !self.modified.contains(&index)
        {
            self.modified.push(index);
        }
    }

    /// Relative paths of modified documents, in order of first modification.
    #[must_use]
    pub fn modified_paths(&self) -> Vec<PathBuf> {
        self.modified
            .iter()
            .map(|&i| self.documents[i].relative.clone())
            .collect()
    }

    /// Write every modified document back to the checkout.
    ///
    /// # Errors
    ///
    /// Returns the first write error. Documents written before the failure
    /// stay written.
    pub fn persist(&self, repo: &OrgRepo) -> KorgResult<()> {
        for &index in &self.modified {
            let document = &self.documents[index];
            store::write(&repo.absolute(&document.relative), &document.config)?;
        }
        Ok(())
    }
}
