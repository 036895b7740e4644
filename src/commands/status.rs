//! `gitwrap status`

use anyhow::Result;
use colored::Colorize;

use super::common::{print_json, GlobalOptions};

pub fn execute(opts: &GlobalOptions) -> Result<()> {
    let repo = opts.open_repository()?;
    let branch = repo.current_branch_name()?;
    let status = repo.status()?;

    if opts.json {
        return print_json(&status);
    }

    println!("On branch {}", branch.green().bold());
    if status.is_clean() {
        println!("{}", "Working tree clean".dimmed());
        return Ok(());
    }

    for entry in status.entries() {
        let code = format!("{}{}", entry.index, entry.worktree);
        let code = if entry.is_conflicted() {
            code.red().bold()
        } else if entry.is_untracked() {
            code.dimmed()
        } else if entry.is_staged() {
            code.green()
        } else {
            code.yellow()
        };
        match &entry.original_path {
            Some(from) => println!("{code} {from} -> {}", entry.path),
            None => println!("{code} {}", entry.path),
        }
    }

    Ok(())
}
