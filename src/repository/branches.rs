//! Branch listing and management

use tracing::debug;

use crate::error::{require_reference, Result};
use crate::git::command::branch;
use crate::objects::branch::names_from_output_lines;
use crate::objects::Branch;

use super::Repository;

impl Repository {
    /// Verbose branch listing; `all` includes remote-tracking branches
    pub fn branches(&self, all: bool) -> Result<Vec<Branch>> {
        let lines = self.output_lines(&branch::lists(all, false), true)?;
        Branch::from_output_lines(&lines)
    }

    pub fn branch_names(&self, all: bool) -> Result<Vec<String>> {
        let lines = self.output_lines(&branch::lists(all, true), true)?;
        Ok(names_from_output_lines(&lines))
    }

    /// A single local branch with its upstream, or `None` if it doesn't exist
    pub fn branch(&self, name: &str) -> Result<Option<Branch>> {
        require_reference(name, "branch name")?;
        let lines = self.output_lines(&branch::single_info(name, false, false, true), true)?;
        for line in &lines {
            let parsed = Branch::from_output_line(line, true)?;
            if parsed.name() == name {
                return Ok(Some(parsed));
            }
        }
        Ok(None)
    }

    /// The checked-out branch, or the detached entry when HEAD is detached.
    /// `None` in a repository with no commits.
    pub fn main_branch(&self) -> Result<Option<Branch>> {
        Ok(self.branches(false)?.into_iter().find(Branch::is_current))
    }

    pub fn branch_exists(&self, name: &str) -> Result<bool> {
        Ok(self.branch(name)?.is_some())
    }

    pub fn create_branch(&self, name: &str, start_point: Option<&str>) -> Result<()> {
        require_reference(name, "branch name")?;
        if let Some(start) = start_point {
            require_reference(start, "start point")?;
        }
        self.execute(&branch::create(name, start_point))?;
        debug!(name, ?start_point, "created branch");
        Ok(())
    }

    pub fn delete_branch(&self, name: &str, force: bool) -> Result<()> {
        require_reference(name, "branch name")?;
        self.execute(&branch::delete(name, force))?;
        debug!(name, force, "deleted branch");
        Ok(())
    }
}
