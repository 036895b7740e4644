//! Shared test helpers

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

use gitwrap::{Config, Repository};

/// Run git in `repo_root`, panicking on failure, and return trimmed stdout
pub fn git(args: &[&str], repo_root: &Path) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_root)
        .env("GIT_AUTHOR_DATE", "1700000000 +0100")
        .env("GIT_COMMITTER_DATE", "1700000000 +0100")
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Create a temporary git repository on `main` with one commit
pub fn init_test_repo() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let repo_root = temp_dir.path();

    git(&["init"], repo_root);
    git(&["config", "user.email", "test@test.com"], repo_root);
    git(&["config", "user.name", "Test User"], repo_root);
    git(&["config", "commit.gpgsign", "false"], repo_root);
    git(&["config", "tag.gpgsign", "false"], repo_root);

    commit_file(repo_root, "README.md", "# Test Repository\n", "Initial commit");
    git(&["branch", "-M", "main"], repo_root);

    temp_dir
}

/// Write `content` to `path` (creating parent directories), stage it, and commit
pub fn commit_file(repo_root: &Path, path: &str, content: &str, message: &str) -> String {
    let full = repo_root.join(path);
    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent).expect("Failed to create directories");
    }
    fs::write(&full, content).expect("Failed to write file");
    git(&["add", path], repo_root);
    git(&["commit", "-m", message], repo_root);
    git(&["rev-parse", "HEAD"], repo_root)
}

/// Open with default config so the developer's own config file is ignored
pub fn open(repo_root: &Path) -> Repository {
    Repository::open_with(repo_root, &Config::default()).expect("Failed to open repository")
}
