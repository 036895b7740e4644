//! Git command builders
//!
//! Each submodule exposes plain functions returning a [`GitCommand`]. Nothing
//! here spawns a process; see [`crate::git::runner`] for execution.
//!
//! - `branch`: branch listing, creation, deletion, `--contains`
//! - `show`: single commit inspection
//! - `rev_list`: commit ancestry counting
//! - `ls_tree`: tree listing
//! - `log`: commit history
//! - `tag`: tag listing, creation, deletion
//! - `porcelain`: init, status, add, commit, checkout, rev-parse

pub mod branch;
pub mod log;
pub mod ls_tree;
pub mod porcelain;
pub mod rev_list;
pub mod show;
pub mod tag;

use shell_escape::escape;
use std::borrow::Cow;
use std::fmt;

/// A single git invocation, minus the executable
///
/// Tokens are emitted in the order `name, args..., subject, subject2, [-- path]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitCommand {
    name: String,
    args: Vec<String>,
    subject: Option<String>,
    subject2: Option<String>,
    path: Option<String>,
}

impl GitCommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            subject: None,
            subject2: None,
            path: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add `arg` only when `cond` holds
    pub fn arg_if(self, cond: bool, arg: impl Into<String>) -> Self {
        if cond {
            self.arg(arg)
        } else {
            self
        }
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn subject2(mut self, subject: impl Into<String>) -> Self {
        self.subject2 = Some(subject.into());
        self
    }

    /// Pathspec, placed after `--`
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full argv, excluding the git executable
    pub fn args(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.args.len() + 5);
        out.push(self.name.clone());
        out.extend(self.args.iter().cloned());
        out.extend(self.subject.iter().cloned());
        out.extend(self.subject2.iter().cloned());
        if let Some(path) = &self.path {
            out.push("--".to_string());
            out.push(path.clone());
        }
        out
    }
}

impl fmt::Display for GitCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("git")?;
        for token in self.args() {
            write!(f, " {}", escape(Cow::Owned(token)))?;
        }
        Ok(())
    }
}
