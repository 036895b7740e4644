//! `git show` invocations

use super::GitCommand;

/// Raw commit header and message for `treeish`, without the diff
pub fn show_commit(treeish: &str) -> GitCommand {
    GitCommand::new("show")
        .arg("-s")
        .arg("--pretty=raw")
        .arg("--no-color")
        .subject(treeish)
}
