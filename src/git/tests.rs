// korg-rs: Kubernetes Org Membership Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::git::cmd::{head_commit, stage};
use crate::git::commit::commit_changes;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn git(args: &[&str], cwd: &Path) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Repository with identity configured and one initial commit containing
/// two config files.
fn init_test_repo_with_commit(path: &Path) {
    git(&["init", "--quiet"], path);
    git(&["config", "user.email", "test@example.com"], path);
    git(&["config", "user.name", "Test"], path);
    git(&["config", "commit.gpgsign", "false"], path);

    for org in ["kubernetes", "kubernetes-sigs"] {
        let dir = path.join("config").join(org);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("org.yaml"), "members:\n- bob\n").unwrap();
    }
    git(&["add", "."], path);
    git(&["commit", "--quiet", "-m", "Initial commit"], path);
}

fn rel(path: &str) -> PathBuf {
    PathBuf::from(path)
}

#[test]
fn test_commit_changes_single_commit_for_all_paths() {
    let temp = temp_dir();
    let root = temp.path();
    init_test_repo_with_commit(root);

    std::fs::write(root.join("config/kubernetes/org.yaml"), "members:\n- alice\n- bob\n").unwrap();
    std::fs::write(
        root.join("config/kubernetes-sigs/org.yaml"),
        "members:\n- alice\n- bob\n",
    )
    .unwrap();

    let paths = vec![
        rel("config/kubernetes/org.yaml"),
        rel("config/kubernetes-sigs/org.yaml"),
    ];
    let id = commit_changes(root, &paths, "add alice to kubernetes, kubernetes-sigs").unwrap();

    assert_eq!(id, head_commit(root).unwrap());
    assert_eq!(git(&["rev-list", "--count", "HEAD"], root), "2");
    assert_eq!(
        git(&["log", "-1", "--format=%s"], root),
        "add alice to kubernetes, kubernetes-sigs"
    );
    let files = git(&["show", "--name-only", "--format=", "HEAD"], root);
    insta::assert_snapshot!(files, @r"
    config/kubernetes-sigs/org.yaml
    config/kubernetes/org.yaml
    ");
}

#[test]
fn test_commit_changes_not_a_repository() {
    let temp = temp_dir();
    let result = commit_changes(temp.path(), &[rel("config/kubernetes/org.yaml")], "msg");
    let err = format!("{:#}", result.unwrap_err());
    assert!(err.contains("unable to open repository"), "got: {err}");
}

#[test]
fn test_commit_changes_stage_failure_keeps_earlier_paths_staged() {
    let temp = temp_dir();
    let root = temp.path();
    init_test_repo_with_commit(root);
    std::fs::write(root.join("config/kubernetes/org.yaml"), "members:\n- alice\n").unwrap();
    let before = head_commit(root).unwrap();

    let paths = vec![rel("config/kubernetes/org.yaml"), rel("config/missing/org.yaml")];
    let err = format!("{:#}", commit_changes(root, &paths, "msg").unwrap_err());
    assert!(err.contains("config/missing/org.yaml"), "got: {err}");

    assert_eq!(head_commit(root).unwrap(), before, "nothing may be committed");
    assert_eq!(
        git(&["diff", "--cached", "--name-only"], root),
        "config/kubernetes/org.yaml"
    );
}

#[test]
fn test_commit_changes_nothing_to_commit() {
    let temp = temp_dir();
    let root = temp.path();
    init_test_repo_with_commit(root);

    let result = commit_changes(root, &[rel("config/kubernetes/org.yaml")], "msg");
    let err = format!("{:#}", result.unwrap_err());
    assert!(err.contains("unable to commit changes"), "got: {err}");
}

#[test]
fn test_stage_outside_worktree_fails() {
    let temp = temp_dir();
    let outside = temp_dir();
    init_test_repo_with_commit(temp.path());
    std::fs::write(outside.path().join("org.yaml"), "members: []\n").unwrap();

    let result = stage(temp.path(), &outside.path().join("org.yaml"));
    assert!(result.is_err());
}
