//! # Edit Command
//!
//! Opens a markdown file in the interactive editor.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::Path;

use anyhow::Result;

use crate::{
    config::Config,
    document::Document,
    session::Session,
    tui::editor,
    ui,
};

/// Executes the edit command.
pub fn execute(file: &Path) -> Result<()> {
    let config = Config::load()?;
    let (registry, classifier) = config.markers()?;
    let keymap = config.keymap(&registry)?;

    let session = Session::new(Document::load(file)?, classifier, registry);
    let screen = editor::edit(session, keymap)?;

    if screen.session().surface().is_modified() {
        ui::print_warning(&format!("Discarded unsaved changes to {}", file.display()));
    }

    Ok(())
}
