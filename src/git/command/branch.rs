//! `git branch` invocations

use super::GitCommand;

const BRANCH: &str = "branch";

/// Branches that contain `reference`
pub fn contains(reference: &str) -> GitCommand {
    GitCommand::new(BRANCH).arg("--contains").subject(reference)
}

/// Create `name`, optionally starting at `start_point`
pub fn create(name: &str, start_point: Option<&str>) -> GitCommand {
    let cmd = GitCommand::new(BRANCH).subject(name);
    match start_point {
        Some(start) => cmd.subject2(start),
        None => cmd,
    }
}

/// List branches. `all` includes remotes; `simple` lists names only.
pub fn lists(all: bool, simple: bool) -> GitCommand {
    GitCommand::new(BRANCH)
        .arg_if(!simple, "-v")
        .arg("--no-color")
        .arg("--no-abbrev")
        .arg_if(all, "-a")
}

/// Info about a single branch. `verbose` adds the upstream (`-vv`).
pub fn single_info(name: &str, all: bool, simple: bool, verbose: bool) -> GitCommand {
    GitCommand::new(BRANCH)
        .arg_if(!simple, "-v")
        .arg("--list")
        .arg("--no-color")
        .arg("--no-abbrev")
        .arg_if(all, "-a")
        .arg_if(verbose, "-vv")
        .subject(name)
}

/// Delete `name`; `force` deletes even when unmerged
pub fn delete(name: &str, force: bool) -> GitCommand {
    GitCommand::new(BRANCH)
        .arg(if force { "-D" } else { "-d" })
        .subject(name)
}
