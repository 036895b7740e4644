//! Opening, initializing, and working-copy operations

use std::fs;
use tempfile::TempDir;

use gitwrap::{Config, Error, Repository};

use super::helpers::{commit_file, git, init_test_repo, open};

#[test]
fn test_open_rejects_plain_directory() {
    let dir = TempDir::new().unwrap();
    let result = Repository::open_with(dir.path(), &Config::default());
    assert!(matches!(result, Err(Error::NotARepository(_))));
}

#[test]
fn test_open_rejects_missing_directory() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    let result = Repository::open_with(&missing, &Config::default());
    assert!(matches!(result, Err(Error::NotARepository(_))));
}

#[test]
fn test_init_creates_repository() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("fresh");

    let repo = Repository::init_with(&target, false, &Config::default()).unwrap();
    assert!(target.join(".git").is_dir());
    assert_eq!(repo.path(), target.as_path());

    // No commits yet: no branches either
    assert!(repo.main_branch().unwrap().is_none());
    assert!(repo.is_clean().unwrap());
}

#[test]
fn test_init_bare() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("bare.git");
    Repository::init_with(&target, true, &Config::default()).unwrap();
    assert!(target.join("HEAD").is_file());
    assert!(!target.join(".git").exists());
}

#[test]
fn test_status_stage_and_commit() {
    let temp_dir = init_test_repo();
    let root = temp_dir.path();
    let repo = open(root);

    assert!(repo.is_clean().unwrap());

    fs::write(root.join("README.md"), "# Changed\n").unwrap();
    fs::write(root.join("notes.txt"), "todo\n").unwrap();

    let status = repo.status().unwrap();
    assert_eq!(status.modified().count(), 1);
    let untracked: Vec<&str> = status.untracked().map(|e| e.path.as_str()).collect();
    assert_eq!(untracked, vec!["notes.txt"]);

    repo.stage(".").unwrap();
    let status = repo.status().unwrap();
    assert_eq!(status.staged().count(), 2);
    assert_eq!(status.untracked().count(), 0);

    let commit = repo.commit_changes("Update docs", false).unwrap();
    assert_eq!(commit.message().short(), "Update docs");
    assert_eq!(commit.author().name, "Test User");
    assert!(repo.is_clean().unwrap());
}

#[test]
fn test_status_with_non_ascii_paths() {
    let temp_dir = init_test_repo();
    let root = temp_dir.path();
    let repo = open(root);

    fs::write(root.join("naïve.txt"), "draft\n").unwrap();
    let status = repo.status().unwrap();
    let untracked: Vec<&str> = status.untracked().map(|e| e.path.as_str()).collect();
    assert_eq!(untracked, vec!["naïve.txt"]);

    repo.stage("naïve.txt").unwrap();
    let status = repo.status().unwrap();
    let staged: Vec<&str> = status.staged().map(|e| e.path.as_str()).collect();
    assert_eq!(staged, vec!["naïve.txt"]);
}

#[test]
fn test_commit_rejects_empty_message() {
    let temp_dir = init_test_repo();
    let repo = open(temp_dir.path());
    assert!(matches!(
        repo.commit_changes("  ", true),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn test_checkout_and_current_branch() {
    let temp_dir = init_test_repo();
    let root = temp_dir.path();
    let repo = open(root);

    assert_eq!(repo.current_branch_name().unwrap(), "main");

    repo.create_branch("feature", None).unwrap();
    repo.checkout("feature").unwrap();
    assert_eq!(repo.current_branch_name().unwrap(), "feature");

    let sha = git(&["rev-parse", "HEAD"], root);
    repo.checkout(&sha).unwrap();
    assert_eq!(repo.current_branch_name().unwrap(), "HEAD");
}

#[test]
fn test_failed_command_reports_git_stderr() {
    let temp_dir = init_test_repo();
    let repo = open(temp_dir.path());

    let err = repo.checkout("does-not-exist").unwrap_err();
    match err {
        Error::CommandFailed { command, stderr, .. } => {
            assert_eq!(command, "git checkout -q does-not-exist");
            assert!(stderr.contains("does-not-exist"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_commit_file_helper_matches_head() {
    let temp_dir = init_test_repo();
    let root = temp_dir.path();
    let sha = commit_file(root, "a.txt", "a", "Add a");
    assert_eq!(open(root).head().unwrap().sha(false), sha);
}
