//! Commit lookup, history, and ancestry

use crate::error::{require_reference, Result};
use crate::git::command::{branch, log, rev_list, show};
use crate::objects::branch::names_from_output_lines;
use crate::objects::{Commit, Log, Treeish};

use super::Repository;

impl Repository {
    /// The commit `treeish` resolves to
    pub fn commit(&self, treeish: &(impl Treeish + ?Sized)) -> Result<Commit> {
        let reference = treeish.treeish();
        require_reference(reference, "treeish")?;
        let lines = self.output_lines(&show::show_commit(reference), false)?;
        Commit::from_output_lines(&lines)
    }

    pub fn head(&self) -> Result<Commit> {
        self.commit("HEAD")
    }

    /// Names of local branches whose history contains `treeish`
    pub fn contained_in(&self, treeish: &(impl Treeish + ?Sized)) -> Result<Vec<String>> {
        let reference = treeish.treeish();
        require_reference(reference, "treeish")?;
        let lines = self.output_lines(&branch::contains(reference), true)?;
        Ok(names_from_output_lines(&lines))
    }

    /// Number of commits reachable from `treeish`, itself included
    pub fn count_commits(&self, treeish: &(impl Treeish + ?Sized)) -> Result<usize> {
        let reference = treeish.treeish();
        require_reference(reference, "treeish")?;
        let lines = self.output_lines(&rev_list::commit_path(reference), true)?;
        Ok(lines.len())
    }

    /// Full sha `treeish` points at
    pub fn resolve_sha(&self, treeish: &(impl Treeish + ?Sized)) -> Result<String> {
        let reference = treeish.treeish();
        require_reference(reference, "treeish")?;
        let output = self.execute(&rev_list::last_commit_for(reference))?;
        Ok(output.stdout.trim().to_string())
    }

    /// History of `treeish`, optionally limited to `path`
    pub fn log(
        &self,
        treeish: &(impl Treeish + ?Sized),
        path: Option<&str>,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> Result<Log> {
        let reference = treeish.treeish();
        require_reference(reference, "treeish")?;
        let lines = self.output_lines(&log::show_log(reference, path, limit, offset), false)?;
        Log::from_output_lines(&lines)
    }
}
