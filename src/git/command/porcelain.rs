//! Working-copy commands: init, status, add, commit, checkout, rev-parse

use super::GitCommand;

pub fn init(bare: bool) -> GitCommand {
    GitCommand::new("init").arg_if(bare, "--bare")
}

/// Machine-readable status, untracked files listed individually
pub fn status() -> GitCommand {
    GitCommand::new("status")
        .arg("--porcelain")
        .arg("--untracked-files=all")
}

/// Stage `what`, including deletions
pub fn add(what: &str) -> GitCommand {
    GitCommand::new("add").arg("--all").subject(what)
}

pub fn commit(message: &str, stage_all: bool) -> GitCommand {
    GitCommand::new("commit")
        .arg_if(stage_all, "-a")
        .arg("-m")
        .arg(message)
}

pub fn checkout(reference: &str) -> GitCommand {
    GitCommand::new("checkout").arg("-q").subject(reference)
}

/// Name of the checked-out branch, or `HEAD` when detached
pub fn rev_parse_head() -> GitCommand {
    GitCommand::new("rev-parse").arg("--abbrev-ref").subject("HEAD")
}

pub fn git_dir() -> GitCommand {
    GitCommand::new("rev-parse").arg("--git-dir")
}

/// Absolute path of the work tree root; fails in a bare repository
pub fn show_toplevel() -> GitCommand {
    GitCommand::new("rev-parse").arg("--show-toplevel")
}
