//! `gitwrap log`, `gitwrap contains`, `gitwrap count`

use anyhow::Result;
use colored::Colorize;

use super::common::{print_json, truncate, GlobalOptions};

const SUBJECT_WIDTH: usize = 72;

pub fn log(
    opts: &GlobalOptions,
    treeish: &str,
    path: Option<&str>,
    limit: Option<usize>,
    skip: Option<usize>,
) -> Result<()> {
    let repo = opts.open_repository()?;
    let log = repo.log(treeish, path, limit, skip)?;

    if opts.json {
        return print_json(&log);
    }

    for commit in &log {
        println!(
            "{} {} {} {}",
            commit.sha(true).yellow(),
            commit.datetime_author().format("%Y-%m-%d").to_string().dimmed(),
            commit.author().name.cyan(),
            truncate(commit.message().short(), SUBJECT_WIDTH)
        );
    }

    Ok(())
}

pub fn contains(opts: &GlobalOptions, treeish: &str) -> Result<()> {
    let repo = opts.open_repository()?;
    let branches = repo.contained_in(treeish)?;

    if opts.json {
        return print_json(&branches);
    }

    if branches.is_empty() {
        println!("No branch contains {treeish}");
    }
    for name in branches {
        println!("{name}");
    }
    Ok(())
}

pub fn count(opts: &GlobalOptions, treeish: &str) -> Result<()> {
    let repo = opts.open_repository()?;
    let count = repo.count_commits(treeish)?;

    if opts.json {
        return print_json(&count);
    }

    println!("{count}");
    Ok(())
}
