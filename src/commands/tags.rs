//! `gitwrap tags`

use anyhow::Result;
use colored::Colorize;

use super::common::{print_json, GlobalOptions};

pub fn execute(opts: &GlobalOptions) -> Result<()> {
    let repo = opts.open_repository()?;
    let tags = repo.tags()?;

    if opts.json {
        return print_json(&tags);
    }

    if tags.is_empty() {
        println!("(no tags)");
    }
    for tag in &tags {
        println!("{} {}", tag.sha()[..7.min(tag.sha().len())].yellow(), tag.name());
    }
    Ok(())
}
