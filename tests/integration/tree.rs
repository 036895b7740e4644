//! Tree listings

use std::fs;

use gitwrap::{Error, ObjectKind};

use super::helpers::{commit_file, git, init_test_repo, open};

fn repo_with_layout() -> tempfile::TempDir {
    let temp_dir = init_test_repo();
    let root = temp_dir.path();
    commit_file(root, "src/main.rs", "fn main() {}\n", "Add main");
    commit_file(root, "src/git/mod.rs", "pub mod runner;\n", "Add git module");
    commit_file(root, ".gitignore", "target\n", "Ignore target");
    temp_dir
}

#[test]
fn test_root_listing() {
    let temp_dir = repo_with_layout();
    let tree = open(temp_dir.path()).tree("HEAD", None).unwrap();

    assert!(tree.is_root());
    let names: Vec<&str> = tree.iter().map(|o| o.name()).collect();
    assert_eq!(names, vec!["src", ".gitignore", "README.md"]);

    let readme = tree.find("README.md").unwrap();
    assert_eq!(readme.kind(), ObjectKind::Blob);
    assert_eq!(readme.size(), Some("# Test Repository\n".len() as u64));
    assert_eq!(readme.permissions(), "100644");
    assert_eq!(readme.extension(), Some("md"));

    let src = tree.find("src").unwrap();
    assert!(src.is_tree());
    assert_eq!(src.size(), None);
}

#[test]
fn test_nested_listing() {
    let temp_dir = repo_with_layout();
    let root = temp_dir.path();
    let repo = open(root);

    let src = repo.tree("main", Some("src")).unwrap();
    assert_eq!(src.path(), "src");
    assert_eq!(src.parent_path(), Some(""));
    let names: Vec<&str> = src.iter().map(|o| o.name()).collect();
    assert_eq!(names, vec!["git", "main.rs"]);

    let git_dir = repo.tree("main", Some("src/git/")).unwrap();
    assert_eq!(git_dir.path(), "src/git");
    let entry = git_dir.find("mod.rs").unwrap();
    assert_eq!(entry.path(), "src/git");
    assert_eq!(entry.full_path(), "src/git/mod.rs");
    assert_eq!(entry.sha(), git(&["rev-parse", "HEAD:src/git/mod.rs"], root));
}

#[test]
fn test_listing_at_older_commit() {
    let temp_dir = repo_with_layout();
    let tree = open(temp_dir.path()).tree("HEAD~3", None).unwrap();
    let names: Vec<&str> = tree.iter().map(|o| o.name()).collect();
    assert_eq!(names, vec!["README.md"]);
}

#[test]
fn test_tree_rejects_files_and_missing_paths() {
    let temp_dir = repo_with_layout();
    let repo = open(temp_dir.path());

    assert!(matches!(
        repo.tree("HEAD", Some("src/main.rs")),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        repo.tree("HEAD", Some("docs")),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn test_tree_object_and_files() {
    let temp_dir = repo_with_layout();
    let repo = open(temp_dir.path());

    let main_rs = repo.tree_object("HEAD", "src/main.rs").unwrap().unwrap();
    assert!(main_rs.is_blob());
    assert_eq!(main_rs.name(), "main.rs");
    assert!(repo.tree_object("HEAD", "src/nope.rs").unwrap().is_none());

    let mut files: Vec<String> = repo
        .files("HEAD")
        .unwrap()
        .iter()
        .map(|o| o.full_path())
        .collect();
    files.sort();
    assert_eq!(
        files,
        vec![".gitignore", "README.md", "src/git/mod.rs", "src/main.rs"]
    );
}

#[test]
fn test_open_from_subdirectory_lists_from_root() {
    let temp_dir = repo_with_layout();
    let root = temp_dir.path();
    let repo = open(&root.join("src"));

    assert_eq!(repo.path(), fs::canonicalize(root).unwrap().as_path());

    let tree = repo.tree("HEAD", None).unwrap();
    assert!(tree.is_root());
    let names: Vec<&str> = tree.iter().map(|o| o.name()).collect();
    assert_eq!(names, vec!["src", ".gitignore", "README.md"]);

    let src = repo.tree("HEAD", Some("src")).unwrap();
    let names: Vec<&str> = src.iter().map(|o| o.name()).collect();
    assert_eq!(names, vec!["git", "main.rs"]);

    assert!(repo.tree_object("HEAD", "src/main.rs").unwrap().is_some());
    assert_eq!(repo.files("HEAD").unwrap().len(), 4);
}

#[test]
fn test_non_ascii_names() {
    let temp_dir = init_test_repo();
    let root = temp_dir.path();
    commit_file(root, "café/menu.txt", "soup\n", "Add menu");
    let repo = open(root);

    let tree = repo.tree("HEAD", None).unwrap();
    let names: Vec<&str> = tree.iter().map(|o| o.name()).collect();
    assert_eq!(names, vec!["café", "README.md"]);

    let cafe = repo.tree("HEAD", Some("café")).unwrap();
    let menu = cafe.find("menu.txt").unwrap();
    assert_eq!(menu.full_path(), "café/menu.txt");
}
