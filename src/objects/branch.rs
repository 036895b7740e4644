//! Branch records parsed from `git branch -v --no-abbrev`
//!
//! Example input:
//! ```text
//! * main                8a3c2f1e9d0b4a5c6e7f8091a2b3c4d5e6f70812 Initial commit
//!   feature/login       1b2c3d4e5f60718293a4b5c6d7e8f90123456789 Add login form
//!   remotes/origin/HEAD -> origin/main
//! ```

use regex::Regex;
use serde::Serialize;
use std::fmt;
use tracing::warn;

use super::Treeish;
use crate::error::{Error, Result};

const BRANCH_LINE: &str = r"^([*+ ]) (\(.*?\)|\S+)\s+([0-9a-f]{40,64})(?:\s(.*))?$";
const UPSTREAM: &str = r"^\[([^\]:]+)(?::[^\]]*)?\]\s?(.*)$";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Branch {
    name: String,
    sha: String,
    comment: String,
    current: bool,
    upstream: Option<String>,
}

impl Branch {
    /// Parse one verbose listing line. `verbose` means the line came from
    /// `-vv` and may carry an `[upstream]` prefix before the comment.
    pub fn from_output_line(line: &str, verbose: bool) -> Result<Self> {
        let re = Regex::new(BRANCH_LINE)?;
        let upstream = Regex::new(UPSTREAM)?;
        Self::parse_with(&re, verbose.then_some(&upstream), line)
    }

    /// Parse a verbose listing, skipping symbolic alias lines
    pub fn from_output_lines<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Self>> {
        let re = Regex::new(BRANCH_LINE)?;
        let mut branches = Vec::new();

        for line in lines.iter().map(AsRef::as_ref) {
            if line.trim().is_empty() || is_alias_line(line) {
                continue;
            }
            match Self::parse_with(&re, None, line) {
                Ok(branch) => branches.push(branch),
                Err(e) => warn!("skipping branch line: {e}"),
            }
        }

        Ok(branches)
    }

    fn parse_with(re: &Regex, upstream: Option<&Regex>, line: &str) -> Result<Self> {
        let caps = re
            .captures(line)
            .ok_or_else(|| Error::parse("branch line", line))?;

        let mut comment = caps.get(4).map_or("", |m| m.as_str()).trim().to_string();
        let mut tracking = None;
        if let Some(up) = upstream {
            if let Some(up_caps) = up.captures(&comment) {
                tracking = Some(up_caps[1].to_string());
                comment = up_caps[2].to_string();
            }
        }

        Ok(Self {
            name: caps[2].to_string(),
            sha: caps[3].to_string(),
            comment,
            current: &caps[1] == "*",
            upstream: tracking,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sha(&self) -> &str {
        &self.sha
    }

    /// Subject of the tip commit
    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn is_current(&self) -> bool {
        self.current
    }

    /// Upstream ref, only known for `-vv` listings
    pub fn upstream(&self) -> Option<&str> {
        self.upstream.as_deref()
    }

    pub fn is_remote(&self) -> bool {
        self.name.starts_with("remotes/")
    }

    /// `(HEAD detached at ...)` or `(no branch)`
    pub fn is_detached(&self) -> bool {
        self.name.starts_with('(')
    }
}

impl Treeish for Branch {
    fn treeish(&self) -> &str {
        if self.is_detached() {
            &self.sha
        } else {
            &self.name
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Names from a non-verbose listing (`branch --no-color`)
pub fn names_from_output_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .map(AsRef::as_ref)
        .filter(|line| !line.trim().is_empty() && !is_alias_line(line))
        .map(strip_marker)
        .map(str::to_string)
        .collect()
}

/// Drop the leading `* `/`+ ` marker git prints before branch names
pub(crate) fn strip_marker(line: &str) -> &str {
    line.trim()
        .trim_start_matches(['*', '+'])
        .trim()
}

fn is_alias_line(line: &str) -> bool {
    line.contains(" -> ")
}
