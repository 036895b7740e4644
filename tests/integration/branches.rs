//! Branch listing and management

use gitwrap::Error;

use super::helpers::{commit_file, git, init_test_repo, open};

#[test]
fn test_list_branches() {
    let temp_dir = init_test_repo();
    let root = temp_dir.path();
    git(&["checkout", "-q", "-b", "feature/login"], root);
    let tip = commit_file(root, "login.rs", "fn login() {}\n", "Add login form");
    git(&["checkout", "-q", "main"], root);

    let repo = open(root);
    let branches = repo.branches(false).unwrap();
    assert_eq!(branches.len(), 2);

    let feature = branches.iter().find(|b| b.name() == "feature/login").unwrap();
    assert_eq!(feature.sha(), tip);
    assert_eq!(feature.comment(), "Add login form");
    assert!(!feature.is_current());

    let main = repo.main_branch().unwrap().unwrap();
    assert_eq!(main.name(), "main");
    assert!(main.is_current());

    assert_eq!(repo.branch_names(false).unwrap(), vec!["feature/login", "main"]);
}

#[test]
fn test_single_branch_lookup() {
    let temp_dir = init_test_repo();
    let root = temp_dir.path();
    let repo = open(root);

    let main = repo.branch("main").unwrap().unwrap();
    assert_eq!(main.sha(), git(&["rev-parse", "main"], root));
    assert_eq!(main.upstream(), None);
    assert_eq!(main.comment(), "Initial commit");

    assert!(repo.branch("missing").unwrap().is_none());
    assert!(repo.branch_exists("main").unwrap());
    assert!(!repo.branch_exists("missing").unwrap());
}

#[test]
fn test_branch_upstream() {
    let temp_dir = init_test_repo();
    let root = temp_dir.path();
    git(&["branch", "--track", "tracking", "main"], root);

    let tracking = open(root).branch("tracking").unwrap().unwrap();
    assert_eq!(tracking.upstream(), Some("main"));
    assert_eq!(tracking.comment(), "Initial commit");
}

#[test]
fn test_create_and_delete_branch() {
    let temp_dir = init_test_repo();
    let root = temp_dir.path();
    let first = git(&["rev-parse", "HEAD"], root);
    commit_file(root, "a.txt", "a", "Add a");

    let repo = open(root);
    repo.create_branch("from-first", Some(first.as_str())).unwrap();
    assert_eq!(repo.branch("from-first").unwrap().unwrap().sha(), first);

    repo.create_branch("from-head", None).unwrap();
    assert_eq!(repo.branch_names(false).unwrap().len(), 3);

    repo.delete_branch("from-head", false).unwrap();
    repo.delete_branch("from-first", false).unwrap();
    assert_eq!(repo.branch_names(false).unwrap(), vec!["main"]);
}

#[test]
fn test_delete_unmerged_needs_force() {
    let temp_dir = init_test_repo();
    let root = temp_dir.path();
    git(&["checkout", "-q", "-b", "wip"], root);
    commit_file(root, "wip.txt", "wip", "WIP");
    git(&["checkout", "-q", "main"], root);

    let repo = open(root);
    let err = repo.delete_branch("wip", false).unwrap_err();
    assert!(matches!(err, Error::CommandFailed { .. }));

    repo.delete_branch("wip", true).unwrap();
    assert!(!repo.branch_exists("wip").unwrap());
}

#[test]
fn test_detached_head_listing() {
    let temp_dir = init_test_repo();
    let root = temp_dir.path();
    let sha = git(&["rev-parse", "HEAD"], root);
    git(&["checkout", "-q", &sha], root);

    let repo = open(root);
    let current = repo.main_branch().unwrap().unwrap();
    assert!(current.is_detached());
    assert_eq!(current.sha(), sha);
    assert_eq!(repo.branches(false).unwrap().len(), 2);
}
