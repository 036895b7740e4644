//! `git ls-tree` invocations

use super::GitCommand;

/// Entries of `treeish`, with sizes. A `path` ending in `/` lists that
/// directory's contents; otherwise only the named entry is listed.
pub fn tree(treeish: &str, path: Option<&str>) -> GitCommand {
    let cmd = GitCommand::new("ls-tree").arg("-l").subject(treeish);
    match path.filter(|p| !p.is_empty()) {
        Some(p) => cmd.path(p),
        None => cmd,
    }
}

/// Every blob under `treeish`, recursively
pub fn list_all(treeish: &str) -> GitCommand {
    GitCommand::new("ls-tree").arg("-r").arg("-l").subject(treeish)
}
