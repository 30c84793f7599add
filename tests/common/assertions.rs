//! Common assertion helpers for command output

#![allow(dead_code)]

use predicates::prelude::*;

pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("Not in a git repository")
}

/// Tooltip as printed after a decorated item
pub fn has_tooltip(tooltip: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("({})", tooltip))
}
