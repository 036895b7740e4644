//! `gitwrap tree`

use anyhow::Result;
use colored::Colorize;

use super::common::{format_size, print_json, GlobalOptions};

pub fn execute(opts: &GlobalOptions, treeish: &str, path: Option<&str>) -> Result<()> {
    let repo = opts.open_repository()?;
    let tree = repo.tree(treeish, path)?;

    if opts.json {
        return print_json(&tree);
    }

    let location = if tree.is_root() { "/" } else { tree.path() };
    println!("{} {}", tree.treeish().yellow(), location.bold());
    println!("{}", "─".repeat(50).dimmed());

    for entry in &tree {
        let size = entry.size().map(format_size).unwrap_or_else(|| "-".to_string());
        let name = if entry.is_tree() {
            format!("{}/", entry.name()).blue().bold()
        } else if entry.is_link() {
            format!("{}@", entry.name()).cyan()
        } else {
            entry.name().normal()
        };
        println!("{} {:>8}  {name}", entry.permissions().dimmed(), size);
    }

    if tree.is_empty() {
        println!("(empty)");
    }

    Ok(())
}
