//! Branch synchronization classification.
//!
//! A branch lands in exactly one [`BranchSync`] outcome, chosen by an ordered set of
//! rules: tracking branches are judged by their ahead/behind counts, untracked branches
//! by whether the repository has any remotes, and a plain local branch is only
//! decorated when it is checked out.

use crate::core::{
    colors::ColorToken,
    decoration::{Decoration, Glyphs},
    state::{BranchState, Remote},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchSync {
    AheadAndBehind,
    Ahead,
    Behind,
    UpToDate,
    /// No upstream while the repository has remotes to publish to
    Unpublished,
    /// Checked out, no upstream, no remotes
    Current,
}

impl BranchSync {
    /// Select the outcome for a branch. Rule order matters: a branch that is both
    /// ahead and behind never reaches the single-direction arms, and remotes are only
    /// consulted for branches without an upstream.
    pub fn classify(branch: &BranchState, remotes: &[Remote]) -> Option<Self> {
        let tracking = branch.tracking.is_some();
        match (tracking, branch.ahead, branch.behind) {
            (true, ahead, behind) if ahead > 0 && behind > 0 => Some(BranchSync::AheadAndBehind),
            (true, ahead, _) if ahead > 0 => Some(BranchSync::Ahead),
            (true, _, behind) if behind > 0 => Some(BranchSync::Behind),
            (true, _, _) => Some(BranchSync::UpToDate),
            (false, _, _) if !remotes.is_empty() => Some(BranchSync::Unpublished),
            (false, _, _) if branch.current => Some(BranchSync::Current),
            _ => None,
        }
    }

    pub fn tooltip(&self) -> &'static str {
        match self {
            BranchSync::AheadAndBehind => "Ahead & Behind",
            BranchSync::Ahead => "Ahead",
            BranchSync::Behind => "Behind",
            BranchSync::UpToDate => "Up to Date",
            BranchSync::Unpublished => "Unpublished",
            BranchSync::Current => "Current Branch",
        }
    }

    pub fn color(&self) -> Option<ColorToken> {
        match self {
            BranchSync::AheadAndBehind => Some(ColorToken::BranchAheadAndBehind),
            BranchSync::Ahead => Some(ColorToken::BranchAhead),
            BranchSync::Behind => Some(ColorToken::BranchBehind),
            BranchSync::UpToDate => Some(ColorToken::BranchUpToDate),
            BranchSync::Unpublished => Some(ColorToken::BranchUnpublished),
            BranchSync::Current => None,
        }
    }

    /// Build the decoration, prefixing the current-branch glyph when `current` is set
    pub fn decoration(&self, current: bool, glyphs: &Glyphs) -> Decoration {
        let prefix = if current { glyphs.current.as_str() } else { "" };
        let direction = match self {
            BranchSync::AheadAndBehind => glyphs.ahead_and_behind.as_str(),
            // Unpublished branches reuse the ahead arrow: they are ready to push
            BranchSync::Ahead | BranchSync::Unpublished => glyphs.ahead.as_str(),
            BranchSync::Behind => glyphs.behind.as_str(),
            BranchSync::UpToDate | BranchSync::Current => "",
        };

        let mut decoration = Decoration::new(format!("{prefix}{direction}"));
        decoration.color = self.color();
        decoration.tooltip = Some(self.tooltip().to_string());
        decoration
    }
}

/// Decoration for a branch, `None` when the branch should stay undecorated
pub fn classify(branch: &BranchState, remotes: &[Remote], glyphs: &Glyphs) -> Option<Decoration> {
    BranchSync::classify(branch, remotes).map(|sync| sync.decoration(branch.current, glyphs))
}
