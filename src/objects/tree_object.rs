//! Single entries of `git ls-tree -l` output
//!
//! ```text
//! 100644 blob 3b18e512dba79e4c8300dd08aeb37f8e728b8dad      12	src/main.rs
//! 040000 tree 1f7a7a472abf3dd9643fd615f6da379c4acb3e3a       -	src/git
//! 160000 commit 5a1b2c3d4e5f60718293a4b5c6d7e8f901234567     -	vendor/lib
//! ```

use regex::Regex;
use serde::Serialize;
use std::fmt;

use super::unquote_path;
use crate::error::{Error, Result};

const LS_TREE_LINE: &str = r"^(\d+) (\w+) ([a-z0-9]+) +(\d+|-)\t(.*)$";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Blob,
    Tree,
    /// A submodule; git calls it `commit`
    Link,
}

impl ObjectKind {
    fn from_type_word(word: &str) -> Option<Self> {
        match word {
            "blob" => Some(Self::Blob),
            "tree" => Some(Self::Tree),
            "commit" => Some(Self::Link),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blob => "blob",
            Self::Tree => "tree",
            Self::Link => "commit",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node of a git tree: file, directory, or submodule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeObject {
    permissions: String,
    kind: ObjectKind,
    sha: String,
    /// `None` for trees and submodules, which `ls-tree` prints as `-`
    size: Option<u64>,
    name: String,
    path: String,
}

impl TreeObject {
    pub fn new(
        permissions: impl Into<String>,
        kind: ObjectKind,
        sha: impl Into<String>,
        size: Option<u64>,
        name: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            permissions: permissions.into(),
            kind,
            sha: sha.into(),
            size,
            name: name.into(),
            path: path.into(),
        }
    }

    /// Parse a single `ls-tree -l` line
    pub fn from_output_line(line: &str) -> Result<Self> {
        let re = Regex::new(LS_TREE_LINE)?;
        Self::parse_with(&re, line)
    }

    /// Parse every non-empty line
    pub fn from_output_lines<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Self>> {
        let re = Regex::new(LS_TREE_LINE)?;
        lines
            .iter()
            .map(AsRef::as_ref)
            .filter(|line| !line.is_empty())
            .map(|line| Self::parse_with(&re, line))
            .collect()
    }

    fn parse_with(re: &Regex, line: &str) -> Result<Self> {
        let caps = re
            .captures(line)
            .ok_or_else(|| Error::parse("ls-tree line", line))?;

        let kind = ObjectKind::from_type_word(&caps[2])
            .ok_or_else(|| Error::parse("tree object type", line))?;
        let size = match &caps[4] {
            "-" => None,
            digits => Some(
                digits
                    .parse()
                    .map_err(|_| Error::parse("tree object size", line))?,
            ),
        };

        let full_path = unquote_path(&caps[5]);
        let (path, name) = match full_path.rfind('/') {
            Some(pos) => (&full_path[..pos], &full_path[pos + 1..]),
            None => ("", full_path.as_str()),
        };

        Ok(Self::new(&caps[1], kind, &caps[3], size, name, path))
    }

    /// `path/name`, or just `name` at the repository root
    pub fn full_path(&self) -> String {
        let full = if self.path.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.path, self.name)
        };
        full.trim_end_matches('/').to_string()
    }

    /// Text after the last `.` in the name. Dotfiles have no extension.
    pub fn extension(&self) -> Option<&str> {
        match self.name.rfind('.') {
            None | Some(0) => None,
            Some(pos) => Some(&self.name[pos + 1..]),
        }
    }

    pub fn is_tree(&self) -> bool {
        self.kind == ObjectKind::Tree
    }

    pub fn is_link(&self) -> bool {
        self.kind == ObjectKind::Link
    }

    pub fn is_blob(&self) -> bool {
        self.kind == ObjectKind::Blob
    }

    pub fn permissions(&self) -> &str {
        &self.permissions
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    pub fn sha(&self) -> &str {
        &self.sha
    }

    pub fn size(&self) -> Option<u64> {
        self.size
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory containing this entry, empty at the root
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for TreeObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
