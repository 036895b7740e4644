//! `gitwrap branches`

use anyhow::Result;
use colored::Colorize;

use super::common::{print_json, truncate, GlobalOptions};

const COMMENT_WIDTH: usize = 60;

pub fn execute(opts: &GlobalOptions, all: bool) -> Result<()> {
    let repo = opts.open_repository()?;
    let branches = repo.branches(all)?;

    if opts.json {
        return print_json(&branches);
    }

    if branches.is_empty() {
        println!("(no branches)");
        return Ok(());
    }

    let width = branches.iter().map(|b| b.name().len()).max().unwrap_or(0);
    for branch in &branches {
        let marker = if branch.is_current() { "*" } else { " " };
        let name = format!("{:width$}", branch.name());
        let name = if branch.is_current() {
            name.green().bold()
        } else if branch.is_remote() {
            name.red()
        } else {
            name.normal()
        };
        println!(
            "{marker} {name} {} {}",
            branch.sha()[..7.min(branch.sha().len())].yellow(),
            truncate(branch.comment(), COMMENT_WIDTH)
        );
    }

    Ok(())
}
