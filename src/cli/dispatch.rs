use anyhow::Result;
use clap::CommandFactory;
use gitwrap::commands::{branches, history, show, status, tags, tree, GlobalOptions};
use gitwrap::completions::{generate_completions, Shell};
use std::str::FromStr;

use super::types::{Cli, Commands};

pub fn dispatch(opts: &GlobalOptions, command: Commands) -> Result<()> {
    match command {
        Commands::Branches { all } => branches::execute(opts, all),
        Commands::Show { treeish } => show::execute(opts, &treeish),
        Commands::Tree { treeish, path } => tree::execute(opts, &treeish, path.as_deref()),
        Commands::Log {
            treeish,
            path,
            limit,
            skip,
        } => history::log(opts, &treeish, path.as_deref(), limit, skip),
        Commands::Tags => tags::execute(opts),
        Commands::Status => status::execute(opts),
        Commands::Contains { treeish } => history::contains(opts, &treeish),
        Commands::Count { treeish } => history::count(opts, &treeish),
        Commands::Completions { shell } => {
            let shell = Shell::from_str(&shell)?;
            let mut cmd = Cli::command();
            generate_completions(&mut cmd, shell);
            Ok(())
        }
    }
}
