//! # UI Utilities
//!
//! Shared output helpers: success/warning lines and highlight-group colors.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{io::IsTerminal, path::Path};

use owo_colors::{AnsiColors, OwoColorize};

use crate::overlay::{overlay, Annotation};

// =============================================================================
// Highlight Groups
// =============================================================================

/// Terminal color for a highlight group. Unknown groups use the default color.
pub fn highlight_color(group: &str) -> AnsiColors {
    match group {
        "TodoUndone" => AnsiColors::White,
        "TodoPending" => AnsiColors::Yellow,
        "TodoDone" => AnsiColors::Green,
        "TodoOnHold" => AnsiColors::Blue,
        "TodoCancelled" => AnsiColors::BrightBlack,
        "TodoImportant" => AnsiColors::Red,
        "TodoRecurring" => AnsiColors::Cyan,
        "TodoAmbiguous" => AnsiColors::Magenta,
        "TodoOngoing" => AnsiColors::BrightYellow,
        _ => AnsiColors::Default,
    }
}

/// Whether stdout should receive ANSI colors.
pub fn color_enabled() -> bool {
    std::io::stdout().is_terminal()
}

/// Colors `text` with the highlight group's color when `color` is set.
pub fn paint(text: &str, group: &str, color: bool) -> String {
    if color {
        text.color(highlight_color(group)).to_string()
    } else {
        text.to_string()
    }
}

/// Renders a line with its annotation, coloring the icon.
pub fn render_annotated(text: &str, annotation: Option<&Annotation>, color: bool) -> String {
    annotation
        .and_then(|a| overlay(text, a).map(|o| (a, o)))
        .map_or_else(
            || text.to_string(),
            |(a, o)| {
                format!(
                    "{}{}{}",
                    o.before,
                    paint(&o.icon, &a.status.highlight, color),
                    o.after
                )
            },
        )
}

// =============================================================================
// Messages
// =============================================================================

/// Prints a success message with a file path.
///
/// Format: `✓ {message}: {path}`
pub fn print_success(message: &str, path: &Path) {
    println!("{} {}: {}", "✓".green(), message, path.display());
}

/// Prints a warning with yellow prefix.
pub fn print_warning(message: &str) {
    eprintln!("{} {message}", "warning:".yellow());
}
