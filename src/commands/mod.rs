//! Command handlers for the `gitwrap` binary

pub mod branches;
pub mod common;
pub mod history;
pub mod show;
pub mod status;
pub mod tags;
pub mod tree;

pub use common::GlobalOptions;
