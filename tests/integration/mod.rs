//! Integration tests against real git repositories
//!
//! Each test builds a throwaway repository in a temp directory with the git
//! CLI, then checks what the library parses out of it.

pub mod branches;
pub mod helpers;
pub mod repository;
pub mod tags;
pub mod tree;
