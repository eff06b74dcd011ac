// korg-rs: Kubernetes Org Membership Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!                KorgError (~24 bytes)
//!                       |
//!   +--------+--------+-----+--------+-------+----+
//!   |        |        |     |        |       |    |
//!   v        v        v     v        v       v    v
//! Valid.   Store     Git  Config  NotImpl   Io  Other
//!  Box      Box      Box   Box    Box<str>  Box Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Validation  InvalidOrgs, InvalidTeam, InvalidUsername, NoTargets,
//!               UnknownTeam, AlreadyMember, NotOrgMember
//!   Store       Read, Parse, Serialize, Metadata, Write, Walk
//!   Git         RepoNotFound, CommandFailed, Gix, StageFailed, CommitFailed
//!   Config      InvalidValue, Load
//! ```

use std::path::Path;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`KorgError`].
pub type KorgResult<T> = std::result::Result<T, KorgError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum KorgError {
    /// Input rejected before any file was touched.
    #[error("validation error: {0}")]
    Validation(#[from] Box<ValidationError>),

    /// Reading or writing a membership document failed.
    #[error("store error: {0}")]
    Store(#[from] Box<StoreError>),

    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Settings error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// The requested operation is not supported.
    #[error("not implemented: {0}")]
    NotImplemented(Box<str>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Internal failure that fits no other variant.
    #[error("{0}")]
    Other(Box<str>),
}

/// Create a [`KorgError::NotImplemented`] for an unsupported operation.
#[must_use]
pub fn not_implemented(operation: impl Into<String>) -> KorgError {
    KorgError::NotImplemented(operation.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for KorgError {
                fn from(err: $error) -> Self {
                    KorgError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ValidationError => Validation,
    StoreError => Store,
    GitError => Git,
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Validation Errors ---

/// Rejected user input.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// One or more org names are not on the allow-list.
    #[error("specified invalid orgs: {orgs}")]
    InvalidOrgs { orgs: String },

    /// Team spec is not `org/team` or `org/group/team`, or names an unknown org.
    #[error("invalid team: {spec}")]
    InvalidTeam { spec: String },

    /// Username is not a valid GitHub login.
    #[error("invalid username: {username}")]
    InvalidUsername { username: String },

    /// Neither orgs nor teams were requested.
    #[error("please specify either --org or --team or both")]
    NoTargets,

    /// Team is not defined in the resolved config file.
    #[error("team {team} not found in {path}")]
    UnknownTeam { team: String, path: String },

    /// Username is already present in the list being extended.
    #[error("user {username} is already a member")]
    AlreadyMember { username: String },

    /// Team membership requires org membership first.
    #[error("user {username} is not a member of org {org}")]
    NotOrgMember { username: String, org: String },
}

// --- Store Errors ---

/// Membership document I/O errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// File could not be read.
    #[error("unable to read file at {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// File content is not a valid membership document.
    #[error("unable to unmarshal config from {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// Document could not be serialized.
    #[error("unable to marshal config for {path}: {source}")]
    Serialize {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// Metadata of the existing file is unavailable.
    #[error("unable to fetch info for {path}: {source}")]
    Metadata {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// File could not be written.
    #[error("unable to write to {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed while merging team files.
    #[error("merge teams {path}: {message}")]
    Walk { path: String, message: String },
}

impl StoreError {
    pub(crate) fn read(path: &Path, source: std::io::Error) -> Self {
        Self::Read {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn parse(path: &Path, source: serde_yaml::Error) -> Self {
        Self::Parse {
            path: path.display().to_string(),
            source,
        }
    }
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
///
/// Large error types are boxed to keep enum size manageable.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to open repository.
    #[error("failed to open repository: {0}")]
    Open(#[from] Box<gix::open::Error>),

    /// Repository has no worktree (bare repository).
    #[error("repository has no worktree (bare repository)")]
    BareRepository,
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Repository not found at the specified path.
    #[error("repository not found: {path}")]
    RepoNotFound { path: String },

    /// Git command execution failed.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),

    /// A path could not be added to the index.
    #[error("unable to stage {path}: {message}")]
    StageFailed { path: String, message: String },

    /// The commit object could not be created.
    #[error("unable to commit changes: {message}")]
    CommitFailed { message: String },
}

// --- Config Errors ---

/// Settings-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid settings value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Settings sources could not be loaded or deserialized.
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),
}

#[cfg(test)]
mod tests;
