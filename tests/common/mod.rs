//! Shared test utilities for git-decorator
//!
//! Integration tests drive real git repositories created in temporary directories.

pub mod assertions;
pub mod fixtures;
pub mod repository;
