//! Output formatting utilities for the terminal host.
//!
//! Keeps every command's output in the same shape: errors prefixed in red, section
//! headers framed by blank lines, and decorated items as `<badge> <label> (<tooltip>)`
//! with the badge and tooltip painted in the decoration's color.

use crate::core::{colors::paint_optional, decoration::Decoration};
use colored::*;

/// Width reserved for badges so labels line up
const BADGE_WIDTH: usize = 2;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    eprintln!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints an informational message
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Formats and prints a section header
///
/// # Format
/// ```text
///
/// <header>:
///
/// ```
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

/// One line for a decorated item; undecorated items get a blank badge column
pub fn format_decorated(label: &ColoredString, decoration: Option<&Decoration>) -> String {
    let Some(decoration) = decoration else {
        return format!("{:width$} {label}", "", width = BADGE_WIDTH);
    };

    let badge = format!("{:width$}", decoration.badge, width = BADGE_WIDTH);
    let mut line = format!("{} {label}", paint_optional(decoration.color, &badge));

    if let Some(tooltip) = &decoration.tooltip {
        let tooltip = format!("({tooltip})");
        line.push(' ');
        line.push_str(&paint_optional(decoration.color, &tooltip).to_string());
    }

    line
}
