//! `git rev-list` invocations

use super::GitCommand;

/// Every commit reachable from `sha`, one per line
pub fn commit_path(sha: &str) -> GitCommand {
    GitCommand::new("rev-list").subject(sha)
}

/// The commit `treeish` points at
pub fn last_commit_for(treeish: &str) -> GitCommand {
    GitCommand::new("rev-list").arg("-n").arg("1").subject(treeish)
}
