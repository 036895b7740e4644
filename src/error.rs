//! Error type shared by the library
//!
//! The binary wraps these in `anyhow` with extra context; library callers can
//! match on the variants directly.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("git executable not found in PATH")]
    GitNotFound,

    #[error("not a git repository: {}", .0.display())]
    NotARepository(PathBuf),

    #[error("{command} exited with code {}: {stderr}", display_code(.code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("{command} killed after {timeout:?} timeout")]
    Timeout { command: String, timeout: Duration },

    #[error("failed to parse {what}: {line:?}")]
    Parse { what: &'static str, line: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

fn display_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "none".to_string(), |c| c.to_string())
}

impl Error {
    pub(crate) fn parse(what: &'static str, line: impl Into<String>) -> Self {
        Error::Parse {
            what,
            line: line.into(),
        }
    }

    /// Exit code of a failed git invocation, if that is what this error is
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Error::CommandFailed { code, .. } => *code,
            _ => None,
        }
    }
}

/// Reject empty names before they reach a command line
pub(crate) fn require_non_empty(value: &str, what: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidArgument(format!("{what} cannot be empty")));
    }
    Ok(())
}

/// A ref-like argument must be non-empty and must not look like an option
pub(crate) fn require_reference(value: &str, what: &str) -> Result<()> {
    require_non_empty(value, what)?;
    if value.starts_with('-') {
        return Err(Error::InvalidArgument(format!(
            "{what} cannot start with '-': {value}"
        )));
    }
    Ok(())
}
