//! Repository records handed to the classifiers.
//!
//! These are the structured payloads a data provider produces and the classifiers
//! consume. They carry no behavior of their own beyond small accessors.
//!
//! # Public API
//! - [`FileStatusRecord`]: A file changed by a commit, with its status code
//! - [`BranchState`]: A local branch and its relationship to its upstream
//! - [`Remote`]: A configured remote of a repository
//!
//! Field names serialize in camelCase since records travel inside resource payloads.

use crate::core::git_status::FileStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileStatusRecord {
    pub status: FileStatus,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_file_name: Option<String>,
}

impl FileStatusRecord {
    pub fn new(status: FileStatus, file_name: impl Into<String>) -> Self {
        Self {
            status,
            file_name: file_name.into(),
            original_file_name: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchState {
    pub name: String,
    pub current: bool,
    /// Upstream shorthand such as `origin/main`
    pub tracking: Option<String>,
    pub ahead: usize,
    pub behind: usize,
}

impl BranchState {
    /// A local branch without an upstream
    pub fn local(name: impl Into<String>, current: bool) -> Self {
        Self {
            name: name.into(),
            current,
            tracking: None,
            ahead: 0,
            behind: 0,
        }
    }

    /// A branch tracking `upstream` with the given divergence
    pub fn tracking(
        name: impl Into<String>,
        current: bool,
        upstream: impl Into<String>,
        ahead: usize,
        behind: usize,
    ) -> Self {
        Self {
            name: name.into(),
            current,
            tracking: Some(upstream.into()),
            ahead,
            behind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remote {
    pub name: String,
    pub url: Option<String>,
}
