//! Runtime configuration
//!
//! Loaded from TOML. Every field is optional; an absent file means defaults.
//!
//! ```toml
//! git_binary = "/usr/local/bin/git"
//! timeout_secs = 30
//!
//! [env]
//! GIT_PAGER = "cat"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "GITWRAP_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the git executable; looked up on PATH when unset
    pub git_binary: Option<PathBuf>,

    /// Kill git invocations that run longer than this
    pub timeout_secs: Option<u64>,

    /// Extra environment passed to every git invocation
    pub env: BTreeMap<String, String>,
}

impl Config {
    /// Load a config file. A missing file is an error here; use
    /// [`Config::discover`] for the optional lookup.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;
        Self::parse(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))
    }

    fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// `$GITWRAP_CONFIG`, then `<config_dir>/gitwrap/config.toml`, then defaults
    pub fn discover() -> Result<Self> {
        if let Ok(explicit) = std::env::var(CONFIG_ENV_VAR) {
            if !explicit.is_empty() {
                return Self::load(Path::new(&explicit));
            }
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// `<config_dir>/gitwrap/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gitwrap").join("config.toml"))
}
