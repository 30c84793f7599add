//! Type-safe git file status enumeration.
//!
//! This module defines [`FileStatus`], the typed form of the single-character status
//! codes git reports for a file within a commit or diff (`M`, `A`, `?`, ...).
//!
//! # Public API
//! - [`FileStatus`]: Enumeration of every status code the decorator understands
//!
//! # Key Features
//! - **Lossless codes**: unknown codes are kept as [`FileStatus::Unknown`] with their raw character
//! - **git2 integration**: direct conversion from `git2::Delta`
//! - **Serialization**: statuses travel as their one-character code in resource payloads

use serde::{Deserialize, Serialize};
use std::fmt;

/// Git file status as carried by commit-file resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "char", into = "char")]
pub enum FileStatus {
    /// Ignored file (!)
    Ignored,
    /// Untracked file (?)
    Untracked,
    /// Added file (A)
    Added,
    /// Copied file (C)
    Copied,
    /// Deleted file (D)
    Deleted,
    /// Modified file (M)
    Modified,
    /// Renamed file (R)
    Renamed,
    /// Any other code (T, U, X, B, ...)
    Unknown(char),
}

impl FileStatus {
    /// Parse a git status code
    pub fn from_code(code: char) -> Self {
        match code {
            '!' => FileStatus::Ignored,
            '?' => FileStatus::Untracked,
            'A' => FileStatus::Added,
            'C' => FileStatus::Copied,
            'D' => FileStatus::Deleted,
            'M' => FileStatus::Modified,
            'R' => FileStatus::Renamed,
            other => FileStatus::Unknown(other),
        }
    }

    /// The single-character git code
    pub fn code(&self) -> char {
        match self {
            FileStatus::Ignored => '!',
            FileStatus::Untracked => '?',
            FileStatus::Added => 'A',
            FileStatus::Copied => 'C',
            FileStatus::Deleted => 'D',
            FileStatus::Modified => 'M',
            FileStatus::Renamed => 'R',
            FileStatus::Unknown(code) => *code,
        }
    }

    /// Convert a diff delta into a status
    pub fn from_git2_delta(delta: git2::Delta) -> Self {
        match delta {
            git2::Delta::Added => FileStatus::Added,
            git2::Delta::Deleted => FileStatus::Deleted,
            git2::Delta::Modified => FileStatus::Modified,
            git2::Delta::Renamed => FileStatus::Renamed,
            git2::Delta::Copied => FileStatus::Copied,
            git2::Delta::Ignored => FileStatus::Ignored,
            git2::Delta::Untracked => FileStatus::Untracked,
            git2::Delta::Typechange => FileStatus::Unknown('T'),
            git2::Delta::Conflicted => FileStatus::Unknown('U'),
            git2::Delta::Unreadable => FileStatus::Unknown('X'),
            git2::Delta::Unmodified => FileStatus::Unknown(' '),
        }
    }

    /// Get human-readable description for status
    pub fn description(&self) -> &'static str {
        match self {
            FileStatus::Ignored => "ignored",
            FileStatus::Untracked => "untracked",
            FileStatus::Added => "added",
            FileStatus::Copied => "copied",
            FileStatus::Deleted => "deleted",
            FileStatus::Modified => "modified",
            FileStatus::Renamed => "renamed",
            FileStatus::Unknown(_) => "unknown",
        }
    }
}

impl From<char> for FileStatus {
    fn from(code: char) -> Self {
        FileStatus::from_code(code)
    }
}

impl From<FileStatus> for char {
    fn from(status: FileStatus) -> Self {
        status.code()
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
