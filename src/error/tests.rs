// korg-rs: Kubernetes Org Membership Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{GitError, KorgError, KorgResult, StoreError, ValidationError, not_implemented};
use std::path::Path;

#[test]
fn test_validation_error_display() {
    let err: KorgError = ValidationError::InvalidOrgs {
        orgs: "foo, bar".to_string(),
    }
    .into();
    insta::assert_snapshot!(err.to_string(), @"validation error: specified invalid orgs: foo, bar");
}

#[test]
fn test_store_error_keeps_path() {
    let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: KorgError = StoreError::read(Path::new("config/kubernetes/org.yaml"), source).into();
    let msg = err.to_string();
    assert!(msg.contains("config/kubernetes/org.yaml"), "got: {msg}");
    assert!(msg.contains("gone"), "got: {msg}");
}

#[test]
fn test_git_error_boxed() {
    let err: KorgError = GitError::StageFailed {
        path: "config/kubernetes/org.yaml".to_string(),
        message: "pathspec did not match".to_string(),
    }
    .into();
    assert!(matches!(err, KorgError::Git(_)));
}

#[test]
fn test_not_implemented_message() {
    let err = not_implemented("remove");
    insta::assert_snapshot!(err.to_string(), @"not implemented: remove");
}

#[test]
fn test_other_shows_message() {
    let err = KorgError::Other("failed to compile username regex".into());
    assert_eq!(err.to_string(), "failed to compile username regex");
}

#[test]
fn test_korg_error_size() {
    // Box<str> variants (NotImplemented, Other) are 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<KorgError>();
    assert!(size <= 24, "KorgError is {size} bytes, expected <= 24");
}

#[test]
fn test_korg_result_size() {
    let size = std::mem::size_of::<KorgResult<()>>();
    assert!(size <= 24, "KorgResult<()> is {size} bytes, expected <= 24");
}
