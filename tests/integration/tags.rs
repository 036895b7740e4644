//! Tag listing and management

use super::helpers::{commit_file, git, init_test_repo, open};

#[test]
fn test_no_tags_is_empty() {
    let temp_dir = init_test_repo();
    assert!(open(temp_dir.path()).tags().unwrap().is_empty());
}

#[test]
fn test_lightweight_and_annotated_tags() {
    let temp_dir = init_test_repo();
    let root = temp_dir.path();
    let first = git(&["rev-parse", "HEAD"], root);
    commit_file(root, "a.txt", "a", "Add a");
    let second = git(&["rev-parse", "HEAD"], root);

    let repo = open(root);
    repo.create_tag("v0.1", Some(first.as_str()), None).unwrap();
    repo.create_tag("v0.2", None, Some("Second release")).unwrap();

    let tags = repo.tags().unwrap();
    assert_eq!(tags.len(), 2);

    let light = repo.tag("v0.1").unwrap().unwrap();
    assert_eq!(light.sha(), first);

    // Annotated tags resolve to the commit, not the tag object
    let annotated = repo.tag("v0.2").unwrap().unwrap();
    assert_eq!(annotated.sha(), second);
    assert_eq!(repo.commit(&annotated).unwrap().sha(false), second);
}

#[test]
fn test_delete_tag() {
    let temp_dir = init_test_repo();
    let repo = open(temp_dir.path());

    repo.create_tag("temp", None, None).unwrap();
    assert!(repo.tag("temp").unwrap().is_some());

    repo.delete_tag("temp").unwrap();
    assert!(repo.tag("temp").unwrap().is_none());
}
