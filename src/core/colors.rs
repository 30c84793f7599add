//! Semantic color tokens for decorations.
//!
//! Decorations never carry concrete colors. They name a theme color by identifier and
//! leave it to the host to resolve. [`ColorToken`] is the closed set of identifiers the
//! classifiers can emit; terminal hosts map them onto ANSI styles with [`ColorToken::paint`].
//!
//! # Color Scheme (terminal)
//! - **Added / up to date**: green
//! - **Deleted / behind**: red
//! - **Renamed / copied**: blue
//! - **Untracked / ahead**: cyan
//! - **Ignored**: bright black
//! - **Ahead & behind**: yellow
//! - **Unpublished**: magenta

use colored::*;
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Ignored,
    Untracked,
    Added,
    Copied,
    Deleted,
    Renamed,
    BranchAheadAndBehind,
    BranchAhead,
    BranchBehind,
    BranchUpToDate,
    BranchUnpublished,
}

impl ColorToken {
    /// Theme color identifier understood by the host
    pub fn id(&self) -> &'static str {
        match self {
            ColorToken::Ignored => "gitDecoration.ignoredResourceForeground",
            ColorToken::Untracked => "gitDecoration.untrackedResourceForeground",
            ColorToken::Added => "gitDecoration.addedResourceForeground",
            ColorToken::Copied => "gitlens.decorations.copiedForegroundColor",
            ColorToken::Deleted => "gitDecoration.deletedResourceForeground",
            ColorToken::Renamed => "gitlens.decorations.renamedForegroundColor",
            ColorToken::BranchAheadAndBehind => {
                "gitlens.decorations.branchAheadAndBehindForegroundColor"
            }
            ColorToken::BranchAhead => "gitlens.decorations.branchAheadForegroundColor",
            ColorToken::BranchBehind => "gitlens.decorations.branchBehindForegroundColor",
            ColorToken::BranchUpToDate => "gitlens.decorations.branchUpToDateForegroundColor",
            ColorToken::BranchUnpublished => "gitlens.decorations.branchUnpublishedForegroundColor",
        }
    }

    /// Apply the terminal style for this token
    pub fn paint(&self, text: &str) -> ColoredString {
        match self {
            ColorToken::Ignored => text.bright_black(),
            ColorToken::Untracked => text.cyan(),
            ColorToken::Added => text.green(),
            ColorToken::Copied => text.blue(),
            ColorToken::Deleted => text.red(),
            ColorToken::Renamed => text.blue(),
            ColorToken::BranchAheadAndBehind => text.yellow(),
            ColorToken::BranchAhead => text.cyan(),
            ColorToken::BranchBehind => text.red(),
            ColorToken::BranchUpToDate => text.green(),
            ColorToken::BranchUnpublished => text.magenta(),
        }
    }
}

/// Paint text with an optional token; unstyled text stays white
pub fn paint_optional(color: Option<ColorToken>, text: &str) -> ColoredString {
    match color {
        Some(token) => token.paint(text),
        None => text.white(),
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl Serialize for ColorToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}
