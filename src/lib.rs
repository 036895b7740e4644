pub mod commands;
pub mod completions;
pub mod config;
pub mod error;
pub mod git;
pub mod objects;
pub mod repository;

pub use config::Config;
pub use error::{Error, Result};
pub use git::{Caller, CommandOutput, GitBinary, GitCommand};
pub use objects::{
    Author, Branch, Commit, Log, Message, ObjectKind, Status, StatusEntry, Tag, Tree, TreeObject,
    Treeish,
};
pub use repository::Repository;
