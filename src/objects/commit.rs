//! Commit records parsed from `git show --pretty=raw`
//!
//! Example input:
//! ```text
//! commit 1b2c3d...
//! tree 9f8e7d...
//! parent 0a1b2c...
//! author Ada Lovelace <ada@example.com> 1700000000 +0100
//! committer Ada Lovelace <ada@example.com> 1700000000 +0100
//!
//!     Subject line
//!
//!     Body text
//! ```

use chrono::{DateTime, FixedOffset};
use regex::Regex;
use serde::Serialize;
use std::fmt;

use super::author::Author;
use super::message::Message;
use super::Treeish;
use crate::error::{Error, Result};

const SHORT_SHA_LEN: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Commit {
    sha: String,
    tree: String,
    parents: Vec<String>,
    author: Author,
    committer: Author,
    message: Message,
    datetime_author: DateTime<FixedOffset>,
    datetime_committer: DateTime<FixedOffset>,
}

struct Patterns {
    commit: Regex,
    tree: Regex,
    parent: Regex,
    author: Regex,
    committer: Regex,
    message: Regex,
}

impl Patterns {
    fn compile() -> Result<Self> {
        Ok(Self {
            commit: Regex::new(r"^commit (\w+)(?: .*)?$")?,
            tree: Regex::new(r"^tree (\w+)$")?,
            parent: Regex::new(r"^parent (\w+)$")?,
            author: Regex::new(r"^author (.*) <(.*)> (\d+) (.*)$")?,
            committer: Regex::new(r"^committer (.*) <(.*)> (\d+) (.*)$")?,
            message: Regex::new(r"^    (.*)$")?,
        })
    }
}

impl Commit {
    /// Build a commit from the lines of a single raw-format record
    pub fn from_output_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        let patterns = Patterns::compile()?;
        Self::parse_with(&patterns, lines)
    }

    /// Parse several records back to back, as printed by `git log --pretty=raw`
    pub(crate) fn many_from_output_lines<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Self>> {
        let patterns = Patterns::compile()?;
        let mut commits = Vec::new();
        let mut start = None;

        for (idx, line) in lines.iter().enumerate() {
            if line.as_ref().starts_with("commit ") {
                if let Some(begin) = start {
                    commits.push(Self::parse_with(&patterns, &lines[begin..idx])?);
                }
                start = Some(idx);
            }
        }
        if let Some(begin) = start {
            commits.push(Self::parse_with(&patterns, &lines[begin..])?);
        }

        Ok(commits)
    }

    fn parse_with<S: AsRef<str>>(patterns: &Patterns, lines: &[S]) -> Result<Self> {
        let mut sha = None;
        let mut tree = None;
        let mut parents = Vec::new();
        let mut author = None;
        let mut committer = None;
        let mut message = Vec::new();
        let mut in_message = false;

        for line in lines {
            let line = line.as_ref();

            if in_message {
                if let Some(caps) = patterns.message.captures(line) {
                    message.push(caps[1].to_string());
                } else if line.is_empty() {
                    message.push(String::new());
                }
                continue;
            }

            if line.is_empty() {
                // Blank line separates the headers from the message
                in_message = sha.is_some();
            } else if let Some(caps) = patterns.commit.captures(line) {
                sha = Some(caps[1].to_string());
            } else if let Some(caps) = patterns.tree.captures(line) {
                tree = Some(caps[1].to_string());
            } else if let Some(caps) = patterns.parent.captures(line) {
                parents.push(caps[1].to_string());
            } else if let Some(caps) = patterns.author.captures(line) {
                author = Some(signature(&caps, line)?);
            } else if let Some(caps) = patterns.committer.captures(line) {
                committer = Some(signature(&caps, line)?);
            }
        }

        // Trailing blank lines belong to the record separator
        while message.last().is_some_and(|l| l.is_empty()) {
            message.pop();
        }

        let first = lines.first().map(|l| l.as_ref().to_string()).unwrap_or_default();
        let sha = sha.ok_or_else(|| Error::parse("commit sha", first.clone()))?;
        let (author, datetime_author) =
            author.ok_or_else(|| Error::parse("commit author", first.clone()))?;
        let (committer, datetime_committer) =
            committer.ok_or_else(|| Error::parse("commit committer", first))?;

        Ok(Self {
            sha,
            tree: tree.unwrap_or_default(),
            parents,
            author,
            committer,
            message: Message::new(message),
            datetime_author,
            datetime_committer,
        })
    }

    /// Full sha, or its first seven characters
    pub fn sha(&self, short: bool) -> &str {
        if short && self.sha.len() > SHORT_SHA_LEN {
            &self.sha[..SHORT_SHA_LEN]
        } else {
            &self.sha
        }
    }

    pub fn tree(&self) -> &str {
        &self.tree
    }

    pub fn parents(&self) -> &[String] {
        &self.parents
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn committer(&self) -> &Author {
        &self.committer
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn datetime_author(&self) -> DateTime<FixedOffset> {
        self.datetime_author
    }

    pub fn datetime_committer(&self) -> DateTime<FixedOffset> {
        self.datetime_committer
    }

    /// No parents: usually the first commit of the repository
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }
}

impl Treeish for Commit {
    fn treeish(&self) -> &str {
        &self.sha
    }
}

impl fmt::Display for Commit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sha)
    }
}

fn signature(caps: &regex::Captures<'_>, line: &str) -> Result<(Author, DateTime<FixedOffset>)> {
    let author = Author::new(&caps[1], &caps[2]);
    let seconds: i64 = caps[3]
        .parse()
        .map_err(|_| Error::parse("signature timestamp", line))?;
    let offset = parse_offset(&caps[4]).ok_or_else(|| Error::parse("timezone offset", line))?;
    let datetime = DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| Error::parse("signature timestamp", line))?
        .with_timezone(&offset);
    Ok((author, datetime))
}

/// `+0100` / `-0530` → fixed offset
fn parse_offset(raw: &str) -> Option<FixedOffset> {
    let raw = raw.trim();
    if raw.len() != 5 || !raw.is_ascii() {
        return None;
    }
    let sign = match &raw[..1] {
        "+" => 1,
        "-" => -1,
        _ => return None,
    };
    let hours: i32 = raw[1..3].parse().ok()?;
    let minutes: i32 = raw[3..5].parse().ok()?;
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
