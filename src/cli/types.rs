use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitwrap")]
#[command(about = "Structured views of git repositories", long_about = None)]
#[command(version)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    /// Repository to operate on
    #[arg(short = 'C', long, global = true, default_value = ".")]
    pub repo: PathBuf,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: $GITWRAP_CONFIG or <config dir>/gitwrap/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the git executable
    #[arg(long, global = true)]
    pub git: Option<PathBuf>,

    /// Log every git invocation to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List branches with their tip commits
    Branches {
        /// Include remote-tracking branches
        #[arg(short, long)]
        all: bool,
    },

    /// Show a commit's header and message
    Show {
        /// Branch, tag, or sha
        #[arg(default_value = "HEAD")]
        treeish: String,
    },

    /// List a directory at some treeish
    Tree {
        #[arg(default_value = "HEAD")]
        treeish: String,

        /// Directory to list (default: repository root)
        path: Option<String>,
    },

    /// Commit history
    Log {
        #[arg(default_value = "HEAD")]
        treeish: String,

        /// Only commits touching this path
        #[arg(long)]
        path: Option<String>,

        /// Maximum number of commits
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Skip this many commits first
        #[arg(long)]
        skip: Option<usize>,
    },

    /// List tags
    Tags,

    /// Working tree status
    Status,

    /// Branches containing a commit
    Contains { treeish: String },

    /// Number of commits reachable from a treeish
    Count {
        #[arg(default_value = "HEAD")]
        treeish: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: String,
    },
}
