//! Tag invocations

use super::GitCommand;

/// All tags with their shas; annotated tags also get a peeled `^{}` line
pub fn list() -> GitCommand {
    GitCommand::new("show-ref").arg("--tags").arg("-d")
}

/// Create tag `name`; a `message` makes it annotated
pub fn create(name: &str, start_point: Option<&str>, message: Option<&str>) -> GitCommand {
    let mut cmd = GitCommand::new("tag");
    if let Some(msg) = message {
        cmd = cmd.arg("-m").arg(msg);
    }
    cmd = cmd.subject(name);
    match start_point {
        Some(start) => cmd.subject2(start),
        None => cmd,
    }
}

pub fn delete(name: &str) -> GitCommand {
    GitCommand::new("tag").arg("-d").subject(name)
}
