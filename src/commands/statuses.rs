//! # Statuses Command
//!
//! Prints the registered statuses with their marker, icon and highlight group.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;
use unicode_width::UnicodeWidthStr;

use crate::{config::Config, ui};

/// Executes the statuses command.
pub fn execute() -> Result<()> {
    let config = Config::load()?;
    let registry = config.registry()?;
    let keymap = config.keymap(&registry)?;
    let color = ui::color_enabled();

    let header = format!(
        "{:<12} {:<8} {:<6} {:<5} {}",
        "NAME", "MARKER", "ICON", "KEY", "HIGHLIGHT"
    );
    println!("{}", if color { header.bold().to_string() } else { header });

    for kind in &registry {
        let key = keymap
            .iter()
            .find(|(_, name)| registry.by_name(name).is_some_and(|k| k.name == kind.name))
            .map_or_else(|| "-".to_string(), |(key, _)| key.to_string());

        println!(
            "{:<12} {:<8} {} {:<5} {}",
            kind.name,
            kind.marker(),
            pad_icon(&ui::paint(&kind.icon, &kind.highlight, color), &kind.icon),
            key,
            kind.highlight
        );
    }

    Ok(())
}

/// Pads a (possibly colored) icon to the icon column's width.
fn pad_icon(painted: &str, raw: &str) -> String {
    format!("{painted}{}", " ".repeat(6usize.saturating_sub(raw.width())))
}
