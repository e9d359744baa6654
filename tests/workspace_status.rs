//! CLI integration tests for `workspace-status`.

use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the workspace-status binary command.
fn workspace_status() -> Command {
    Command::cargo_bin("workspace-status").unwrap()
}

fn git_available() -> bool {
    which::which("git").is_ok()
}

/// Run git in `dir` with a fixed identity and no user configuration.
fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args(["-c", "user.name=Test", "-c", "user.email=test@example.com"])
        .args(args)
        .current_dir(dir)
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("HOME", dir)
        .status()
        .unwrap();
    assert!(status.success(), "git {:?} failed", args);
}

#[test]
fn test_git_missing() {
    let tmp = TempDir::new().unwrap();

    workspace_status()
        .current_dir(tmp.path())
        .env("PATH", tmp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("could not invoke git"));
}

#[test]
fn test_outside_repository() {
    if !git_available() {
        eprintln!("skipping: git not installed");
        return;
    }
    let tmp = TempDir::new().unwrap();

    workspace_status()
        .current_dir(tmp.path())
        .env("GIT_CEILING_DIRECTORIES", tmp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error using git"));
}

#[test]
fn test_tagged_revision() {
    if !git_available() {
        eprintln!("skipping: git not installed");
        return;
    }
    let tmp = TempDir::new().unwrap();
    let repo = tmp.path();

    git(repo, &["init", "-q"]);
    std::fs::write(repo.join("BUILD"), "# build\n").unwrap();
    git(repo, &["add", "BUILD"]);
    git(repo, &["commit", "-q", "-m", "initial"]);
    git(repo, &["tag", "-a", "v1.2.3", "-m", "release"]);

    workspace_status()
        .current_dir(repo)
        .assert()
        .success()
        .stdout("STABLE_BUILD_OAUTH_LABEL v1.2.3\n");

    std::fs::write(repo.join("BUILD"), "# changed\n").unwrap();

    workspace_status()
        .current_dir(repo)
        .assert()
        .success()
        .stdout("STABLE_BUILD_OAUTH_LABEL v1.2.3-dirty\n");
}

#[test]
fn test_untagged_revision_is_abbreviated_hash() {
    if !git_available() {
        eprintln!("skipping: git not installed");
        return;
    }
    let tmp = TempDir::new().unwrap();
    let repo = tmp.path();

    git(repo, &["init", "-q"]);
    std::fs::write(repo.join("BUILD"), "# build\n").unwrap();
    git(repo, &["add", "BUILD"]);
    git(repo, &["commit", "-q", "-m", "initial"]);
    // Tags that aren't releases are ignored.
    git(repo, &["tag", "-a", "nightly", "-m", "nightly"]);

    workspace_status()
        .current_dir(repo)
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^STABLE_BUILD_OAUTH_LABEL [0-9a-f]{7,}\n$").unwrap());
}
