//! Working tree status parsed from `git status --porcelain`
//!
//! Each line is `XY <path>`, or `XY <orig> -> <path>` for renames and copies.
//! `X` is the index state, `Y` the work tree state, `??` untracked.

use serde::Serialize;

use super::unquote_path;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusEntry {
    pub index: char,
    pub worktree: char,
    pub path: String,
    pub original_path: Option<String>,
}

impl StatusEntry {
    pub fn from_output_line(line: &str) -> Result<Self> {
        let mut chars = line.chars();
        let (Some(index), Some(worktree), Some(' ')) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(Error::parse("status line", line));
        };
        let rest = chars.as_str();
        if rest.is_empty() {
            return Err(Error::parse("status line", line));
        }

        let (original_path, path) = match rest.split_once(" -> ") {
            Some((from, to)) if matches!(index, 'R' | 'C') => {
                (Some(unquote_path(from)), unquote_path(to))
            }
            _ => (None, unquote_path(rest)),
        };

        Ok(Self {
            index,
            worktree,
            path,
            original_path,
        })
    }

    pub fn is_untracked(&self) -> bool {
        self.index == '?' && self.worktree == '?'
    }

    pub fn is_ignored(&self) -> bool {
        self.index == '!' && self.worktree == '!'
    }

    /// Has changes recorded in the index
    pub fn is_staged(&self) -> bool {
        !matches!(self.index, ' ' | '?' | '!')
    }

    /// Has changes in the work tree not yet staged
    pub fn is_modified(&self) -> bool {
        !matches!(self.worktree, ' ' | '?' | '!')
    }

    /// Both sides modified during a merge
    pub fn is_conflicted(&self) -> bool {
        matches!(
            (self.index, self.worktree),
            ('U', _) | (_, 'U') | ('A', 'A') | ('D', 'D')
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Status {
    entries: Vec<StatusEntry>,
}

impl Status {
    pub fn from_output_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        let entries = lines
            .iter()
            .map(AsRef::as_ref)
            .filter(|line| !line.trim().is_empty())
            .map(StatusEntry::from_output_line)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[StatusEntry] {
        &self.entries
    }

    pub fn is_clean(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn staged(&self) -> impl Iterator<Item = &StatusEntry> {
        self.entries.iter().filter(|e| e.is_staged())
    }

    pub fn modified(&self) -> impl Iterator<Item = &StatusEntry> {
        self.entries.iter().filter(|e| e.is_modified())
    }

    pub fn untracked(&self) -> impl Iterator<Item = &StatusEntry> {
        self.entries.iter().filter(|e| e.is_untracked())
    }

    pub fn conflicted(&self) -> impl Iterator<Item = &StatusEntry> {
        self.entries.iter().filter(|e| e.is_conflicted())
    }
}
