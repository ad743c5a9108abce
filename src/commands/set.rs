//! # Set Command
//!
//! Sets the todo status of one line in a markdown file.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::{
    config::Config,
    document::Document,
    session::{Cursor, Session, Surface},
    ui,
};

/// Arguments for the set command
pub struct SetArgs {
    /// Status name
    pub status: String,
    /// Markdown file
    pub file: PathBuf,
    /// One-based line number
    pub line: usize,
}

/// Executes the set command.
pub fn execute(args: &SetArgs) -> Result<()> {
    let config = Config::load()?;
    let (registry, classifier) = config.markers()?;

    let document = Document::load(&args.file)?;
    let line_count = document.lines().len();
    if args.line == 0 || args.line > line_count {
        bail!(
            "Line {} is out of range ({} has {line_count} lines)",
            args.line,
            args.file.display()
        );
    }

    let mut session = Session::new(document, classifier, registry);
    session
        .surface_mut()
        .set_cursor(Cursor::new(args.line - 1, 0));

    let applied = session
        .set_status_named(&args.status)
        .with_context(|| format!("Failed to set status on line {}", args.line))?;
    if !applied {
        bail!("Line {} is not a bullet or heading", args.line);
    }

    let mut document = session.into_surface();
    if !document.is_modified() {
        ui::print_success("Already up to date", &args.file);
        return Ok(());
    }

    document.save()?;
    ui::print_success(&format!("Set line {} to {}", args.line, args.status), &args.file);

    Ok(())
}
