//! File-status classification.
//!
//! Maps a git status code onto the badge, color and tooltip shown next to a file in a
//! commit. Modified files get a bare `M` badge with no color and no tooltip so that the
//! common case stays visually quiet.

use crate::core::{colors::ColorToken, decoration::Decoration, git_status::FileStatus};

/// Decoration for a file status, `None` for codes without one
pub fn classify(status: FileStatus) -> Option<Decoration> {
    let decoration = match status {
        FileStatus::Ignored => Decoration::new("I")
            .with_color(ColorToken::Ignored)
            .with_tooltip("Ignored"),
        FileStatus::Untracked => Decoration::new("U")
            .with_color(ColorToken::Untracked)
            .with_tooltip("Untracked"),
        FileStatus::Added => Decoration::new("A")
            .with_color(ColorToken::Added)
            .with_tooltip("Added"),
        FileStatus::Copied => Decoration::new("C")
            .with_color(ColorToken::Copied)
            .with_tooltip("Copied"),
        FileStatus::Deleted => Decoration::new("D")
            .with_color(ColorToken::Deleted)
            .with_tooltip("Deleted"),
        FileStatus::Modified => Decoration::new("M"),
        FileStatus::Renamed => Decoration::new("R")
            .with_color(ColorToken::Renamed)
            .with_tooltip("Renamed"),
        FileStatus::Unknown(_) => return None,
    };

    Some(decoration)
}

/// Classify a raw status code
pub fn classify_code(code: char) -> Option<Decoration> {
    classify(FileStatus::from_code(code))
}
