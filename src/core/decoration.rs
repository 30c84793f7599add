//! Decoration descriptors and badge glyphs.
//!
//! A [`Decoration`] is what every classifier hands back to the host: a short badge,
//! an optional semantic color and an optional tooltip. `None` in place of a decoration
//! means nothing should be shown.

use crate::core::colors::ColorToken;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decoration {
    pub badge: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorToken>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

impl Decoration {
    pub fn new(badge: impl Into<String>) -> Self {
        Self {
            badge: badge.into(),
            color: None,
            tooltip: None,
        }
    }

    pub fn with_color(mut self, color: ColorToken) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }
}

/// Glyphs used to build branch badges
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Glyphs {
    /// Prefix marking the checked-out branch
    pub current: String,
    pub ahead: String,
    pub behind: String,
    pub ahead_and_behind: String,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            current: "\u{2714}".to_string(),
            ahead: "\u{2191}".to_string(),
            behind: "\u{2193}".to_string(),
            ahead_and_behind: "\u{21F5}".to_string(),
        }
    }
}
