//! Tags parsed from `git show-ref --tags -d`
//!
//! Annotated tags are printed twice; the `^{}` line carries the commit the
//! tag object points at:
//! ```text
//! 5a1b...  refs/tags/v1.0
//! 8a3c...  refs/tags/v1.0^{}
//! ```

use serde::Serialize;
use std::fmt;

use super::Treeish;
use crate::error::{Error, Result};

const TAG_PREFIX: &str = "refs/tags/";
const PEELED_SUFFIX: &str = "^{}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    name: String,
    sha: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, sha: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sha: sha.into(),
        }
    }

    /// Parse a full listing. Order of first appearance is kept.
    pub fn from_output_lines<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Self>> {
        let mut tags: Vec<Tag> = Vec::new();

        for line in lines.iter().map(AsRef::as_ref) {
            if line.trim().is_empty() {
                continue;
            }
            let (sha, reference) = line
                .split_once(' ')
                .ok_or_else(|| Error::parse("show-ref line", line))?;
            let name = reference
                .trim()
                .strip_prefix(TAG_PREFIX)
                .ok_or_else(|| Error::parse("tag ref", line))?;

            match name.strip_suffix(PEELED_SUFFIX) {
                Some(base) => match tags.iter_mut().find(|t| t.name == base) {
                    Some(existing) => existing.sha = sha.to_string(),
                    None => tags.push(Tag::new(base, sha)),
                },
                None => tags.push(Tag::new(name, sha)),
            }
        }

        Ok(tags)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Commit the tag points at
    pub fn sha(&self) -> &str {
        &self.sha
    }
}

impl Treeish for Tag {
    fn treeish(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
