//! Locating the git executable

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};

/// A git executable on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitBinary {
    path: PathBuf,
}

impl GitBinary {
    /// Find `git` on PATH
    pub fn locate() -> Result<Self> {
        which::which("git")
            .map(|path| Self { path })
            .map_err(|_| Error::GitNotFound)
    }

    /// Use an explicit executable
    pub fn at(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            return Err(Error::InvalidArgument(format!(
                "git binary does not exist: {}",
                path.display()
            )));
        }
        Ok(Self { path })
    }

    /// Explicit path when given, PATH lookup otherwise
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::at(path),
            None => Self::locate(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Version reported by `git --version`, e.g. `2.43.0`
    pub fn version(&self) -> Result<String> {
        let output = Command::new(&self.path).arg("--version").output()?;
        if !output.status.success() {
            return Err(Error::CommandFailed {
                command: "git --version".to_string(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_version(&stdout).ok_or_else(|| Error::parse("git version", stdout.trim()))
    }
}

fn parse_version(output: &str) -> Option<String> {
    output
        .trim()
        .strip_prefix("git version ")
        .and_then(|rest| rest.split_whitespace().next())
        .map(str::to_string)
}
