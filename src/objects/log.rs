use serde::Serialize;

use super::commit::Commit;
use crate::error::Result;

/// Commits in the order `git log` printed them, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Log {
    commits: Vec<Commit>,
}

impl Log {
    pub fn from_output_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        Ok(Self {
            commits: Commit::many_from_output_lines(lines)?,
        })
    }

    pub fn commits(&self) -> &[Commit] {
        &self.commits
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Commit> {
        self.commits.iter()
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    pub fn first(&self) -> Option<&Commit> {
        self.commits.first()
    }

    pub fn last(&self) -> Option<&Commit> {
        self.commits.last()
    }

    pub fn get(&self, index: usize) -> Option<&Commit> {
        self.commits.get(index)
    }
}

impl IntoIterator for Log {
    type Item = Commit;
    type IntoIter = std::vec::IntoIter<Commit>;

    fn into_iter(self) -> Self::IntoIter {
        self.commits.into_iter()
    }
}

impl<'a> IntoIterator for &'a Log {
    type Item = &'a Commit;
    type IntoIter = std::slice::Iter<'a, Commit>;

    fn into_iter(self) -> Self::IntoIter {
        self.commits.iter()
    }
}
