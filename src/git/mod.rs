//! Git process plumbing
//!
//! This module provides:
//! - Locating the git executable
//! - Building command lines for the supported subcommands
//! - Running them against a repository and capturing output

pub mod binary;
pub mod command;
pub mod runner;

pub use binary::GitBinary;
pub use command::GitCommand;
pub use runner::{Caller, CommandOutput};
