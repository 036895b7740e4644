//! Options and helpers shared by every command

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

use crate::config::Config;
use crate::repository::Repository;

/// Flags accepted by every subcommand
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub repo: PathBuf,
    pub json: bool,
    pub config: Option<PathBuf>,
    pub git: Option<PathBuf>,
}

impl GlobalOptions {
    /// Config file (explicit or discovered) with the `--git` override applied
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::discover()?,
        };
        if let Some(git) = &self.git {
            config.git_binary = Some(git.clone());
        }
        Ok(config)
    }

    pub fn open_repository(&self) -> Result<Repository> {
        let config = self.load_config()?;
        Repository::open_with(&self.repo, &config)
            .with_context(|| format!("Failed to open repository at {}", self.repo.display()))
    }
}

/// Pretty JSON to stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{rendered}");
    Ok(())
}

/// Truncate by character count, appending `...` when cut
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}

/// Human-readable byte count
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "K", "M", "G"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes}{}", UNITS[0])
    } else {
        format!("{value:.1}{}", UNITS[unit])
    }
}
