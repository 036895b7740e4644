//! `git log` invocations

use super::GitCommand;

/// Raw history of `treeish`, optionally restricted to `path` and windowed
/// by `limit`/`offset`
pub fn show_log(
    treeish: &str,
    path: Option<&str>,
    limit: Option<usize>,
    offset: Option<usize>,
) -> GitCommand {
    let mut cmd = GitCommand::new("log")
        .arg("-s")
        .arg("--pretty=raw")
        .arg("--no-color");
    if let Some(n) = limit {
        cmd = cmd.arg(format!("--max-count={n}"));
    }
    if let Some(n) = offset {
        cmd = cmd.arg(format!("--skip={n}"));
    }
    cmd = cmd.subject(treeish);
    match path.filter(|p| !p.is_empty()) {
        Some(p) => cmd.path(p),
        None => cmd,
    }
}
