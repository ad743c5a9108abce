//! # List Command
//!
//! Lists todo lines of a markdown file, or of every markdown file below a
//! directory, optionally filtered by status.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use walkdir::WalkDir;

use crate::{
    classify::Classifier,
    config::Config,
    constants::MARKDOWN_FILE_EXTENSION,
    marker,
    status::{StatusKind, StatusRegistry},
    ui,
};

/// Arguments for the list command
pub struct ListArgs {
    /// File or directory to scan
    pub path: PathBuf,
    /// Only show lines with this status
    pub status: Option<String>,
}

/// A line carrying a status marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoEntry {
    pub path: PathBuf,
    /// One-based line number
    pub line: usize,
    pub status: StatusKind,
    /// Line text after the marker, trimmed
    pub text: String,
}

/// Walks markdown files under `root` (or just `root` if it is a file).
pub fn walk_markdown(root: &Path) -> Vec<PathBuf> {
    if root.is_file() {
        return vec![root.to_path_buf()];
    }

    let mut paths: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'))
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext == MARKDOWN_FILE_EXTENSION)
        })
        .map(walkdir::DirEntry::into_path)
        .collect();
    paths.sort();
    paths
}

/// Collects every marked line under `root`.
pub fn collect_todos(
    root: &Path,
    classifier: &Classifier,
    registry: &StatusRegistry,
    status: Option<&StatusKind>,
) -> Result<Vec<TodoEntry>> {
    let mut entries = Vec::new();

    for path in walk_markdown(root) {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        for (index, text) in content.lines().enumerate() {
            let Some((found, kind)) = marker::status_of(classifier, registry, text) else {
                continue;
            };
            if status.is_some_and(|wanted| wanted.literal != kind.literal) {
                continue;
            }
            entries.push(TodoEntry {
                path: path.clone(),
                line: index + 1,
                status: kind.clone(),
                text: text[found.span.end..].trim().to_string(),
            });
        }
    }

    Ok(entries)
}

/// Executes the list command.
pub fn execute(args: &ListArgs) -> Result<()> {
    let config = Config::load()?;
    let (registry, classifier) = config.markers()?;

    let status = args
        .status
        .as_deref()
        .map(|name| registry.resolve(name))
        .transpose()?;

    let entries = collect_todos(&args.path, &classifier, &registry, status)?;
    let color = ui::color_enabled();
    if entries.is_empty() {
        let message = "No todo items found.";
        if color {
            println!("{}", message.dimmed());
        } else {
            println!("{message}");
        }
        return Ok(());
    }

    for entry in &entries {
        let location = format!("{}:{}:", entry.path.display(), entry.line);
        println!(
            "{} {} {:<10} {}",
            if color {
                location.dimmed().to_string()
            } else {
                location
            },
            ui::paint(&entry.status.icon, &entry.status.highlight, color),
            entry.status.name,
            entry.text
        );
    }

    Ok(())
}
