//! Repository facade
//!
//! A [`Repository`] pairs a working-copy path with a [`Caller`]. Operations are
//! grouped by concern:
//!
//! - `history`: commits, log, ancestry counts
//! - `branches`: listing, lookup, create/delete
//! - `tags`: listing, lookup, create/delete
//! - `tree`: `ls-tree` listings
//!
//! Working-copy operations (status, stage, commit, checkout) live here.

mod branches;
mod history;
mod tags;
mod tree;

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::Config;
use crate::error::{require_non_empty, require_reference, Error, Result};
use crate::git::command::{porcelain, GitCommand};
use crate::git::{Caller, CommandOutput};
use crate::objects::{Commit, Status};

#[derive(Debug, Clone)]
pub struct Repository {
    path: PathBuf,
    caller: Caller,
}

impl Repository {
    /// Open an existing work tree (or bare repository) with discovered config
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, &Config::discover()?)
    }

    pub fn open_with(path: impl AsRef<Path>, config: &Config) -> Result<Self> {
        Self::open_with_caller(path, Caller::from_config(config)?)
    }

    /// Open `path`, which may be any directory inside the work tree. The
    /// repository is rooted at the work tree's top level so listings and
    /// pathspecs are relative to it; bare repositories keep `path`.
    pub fn open_with_caller(path: impl AsRef<Path>, caller: Caller) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.is_dir() || !caller.succeeds(&porcelain::git_dir(), &path) {
            return Err(Error::NotARepository(path));
        }
        let path = match caller.run(&porcelain::show_toplevel(), &path)? {
            (status, output) if status.success() && !output.stdout.trim().is_empty() => {
                PathBuf::from(output.stdout.trim_end_matches(['\n', '\r']))
            }
            _ => path,
        };
        debug!(path = %path.display(), "opened repository");
        Ok(Self { path, caller })
    }

    /// Create the directory if needed and run `git init` in it
    pub fn init(path: impl AsRef<Path>, bare: bool) -> Result<Self> {
        Self::init_with(path, bare, &Config::discover()?)
    }

    pub fn init_with(path: impl AsRef<Path>, bare: bool, config: &Config) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        fs::create_dir_all(&path)?;
        let caller = Caller::from_config(config)?;
        caller.execute(&porcelain::init(bare), &path)?;
        Ok(Self { path, caller })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn caller(&self) -> &Caller {
        &self.caller
    }

    /// Run an arbitrary command in this repository
    pub fn execute(&self, command: &GitCommand) -> Result<CommandOutput> {
        self.caller.execute(command, &self.path)
    }

    pub(crate) fn output_lines(&self, command: &GitCommand, strip_empty: bool) -> Result<Vec<String>> {
        Ok(self.execute(command)?.output_lines(strip_empty))
    }

    pub fn status(&self) -> Result<Status> {
        let lines = self.output_lines(&porcelain::status(), true)?;
        Status::from_output_lines(&lines)
    }

    pub fn is_clean(&self) -> Result<bool> {
        Ok(self.status()?.is_clean())
    }

    /// Stage `what` (a pathspec; `.` for everything)
    pub fn stage(&self, what: &str) -> Result<()> {
        require_non_empty(what, "pathspec")?;
        self.execute(&porcelain::add(what))?;
        Ok(())
    }

    /// Commit and return the new `HEAD`
    pub fn commit_changes(&self, message: &str, stage_all: bool) -> Result<Commit> {
        require_non_empty(message, "commit message")?;
        self.execute(&porcelain::commit(message, stage_all))?;
        self.head()
    }

    pub fn checkout(&self, reference: &str) -> Result<()> {
        require_reference(reference, "reference")?;
        self.execute(&porcelain::checkout(reference))?;
        Ok(())
    }

    /// Checked-out branch name; `HEAD` when detached
    pub fn current_branch_name(&self) -> Result<String> {
        let output = self.execute(&porcelain::rev_parse_head())?;
        Ok(output.stdout.trim().to_string())
    }
}
