//! `gitwrap show`

use anyhow::Result;
use colored::Colorize;

use super::common::{print_json, GlobalOptions};

pub fn execute(opts: &GlobalOptions, treeish: &str) -> Result<()> {
    let repo = opts.open_repository()?;
    let commit = repo.commit(treeish)?;

    if opts.json {
        return print_json(&commit);
    }

    println!("{} {}", "commit".yellow(), commit.sha(false).yellow());
    for parent in commit.parents() {
        println!("{} {parent}", "parent".dimmed());
    }
    println!("Author: {}", commit.author());
    println!("Date:   {}", commit.datetime_author().to_rfc2822());
    if commit.committer() != commit.author() {
        println!("Commit: {}", commit.committer());
    }
    println!();
    for line in commit.message().lines() {
        println!("    {line}");
    }

    Ok(())
}
