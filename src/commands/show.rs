//! # Show Command
//!
//! Prints a markdown file the way the editor displays it, with status icons
//! drawn over their markers.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::Path;

use anyhow::Result;

use crate::{
    config::Config,
    document::Document,
    session::{Session, Surface},
    ui,
};

/// Renders every line of `document` with its annotation applied.
pub fn render(session: &Session<Document>, color: bool) -> Vec<String> {
    let buffer = session.surface().buffer_id();
    session
        .surface()
        .lines()
        .iter()
        .enumerate()
        .map(|(index, text)| {
            ui::render_annotated(text, session.annotator().get(buffer, index), color)
        })
        .collect()
}

/// Executes the show command.
pub fn execute(file: &Path) -> Result<()> {
    let config = Config::load()?;
    let (registry, classifier) = config.markers()?;

    let session = Session::new(Document::load(file)?, classifier, registry);
    for line in render(&session, ui::color_enabled()) {
        println!("{line}");
    }

    Ok(())
}
