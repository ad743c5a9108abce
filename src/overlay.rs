//! # Overlay Annotator
//!
//! Keeps one icon annotation per marker line. Annotations are display-only:
//! they are derived from the buffer text and can be dropped and rebuilt at any
//! time, so the annotator never diffs, it only recomputes.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{collections::HashMap, fmt};

use log::debug;
use unicode_width::UnicodeWidthStr;

use crate::{
    classify::{Classifier, Span},
    marker,
    status::{StatusKind, StatusRegistry},
};

/// Identifies an editing surface's buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct BufferId(pub u64);

impl fmt::Display for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "buffer#{}", self.0)
    }
}

/// An icon drawn over a marker's span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Marker span the icon covers
    pub span: Span,

    /// Status whose icon is drawn
    pub status: StatusKind,
}

/// Per-line annotation store, keyed by buffer and zero-based line index.
#[derive(Debug, Clone, Default)]
pub struct Annotator {
    annotations: HashMap<(BufferId, usize), Annotation>,
}

impl Annotator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever annotation `line` had with one for `kind` at `span`.
    pub fn annotate(&mut self, buffer: BufferId, line: usize, span: Span, kind: &StatusKind) {
        self.annotations.insert(
            (buffer, line),
            Annotation {
                span,
                status: kind.clone(),
            },
        );
    }

    /// Removes the annotation of one line, returning it if there was one.
    pub fn clear_line(&mut self, buffer: BufferId, line: usize) -> Option<Annotation> {
        self.annotations.remove(&(buffer, line))
    }

    /// Removes every annotation of `buffer`.
    pub fn clear_buffer(&mut self, buffer: BufferId) {
        self.annotations.retain(|(b, _), _| *b != buffer);
    }

    pub fn get(&self, buffer: BufferId, line: usize) -> Option<&Annotation> {
        self.annotations.get(&(buffer, line))
    }

    /// Annotations of `buffer`, ordered by line.
    pub fn annotations(&self, buffer: BufferId) -> Vec<(usize, &Annotation)> {
        let mut lines: Vec<_> = self
            .annotations
            .iter()
            .filter(|((b, _), _)| *b == buffer)
            .map(|((_, line), annotation)| (*line, annotation))
            .collect();
        lines.sort_by_key(|(line, _)| *line);
        lines
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Rebuilds all annotations of `buffer` from its text.
    ///
    /// Returns the number of annotated lines.
    pub fn rescan<'a, I>(
        &mut self,
        buffer: BufferId,
        lines: I,
        classifier: &Classifier,
        registry: &StatusRegistry,
    ) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.clear_buffer(buffer);

        let mut count = 0;
        for (index, text) in lines.into_iter().enumerate() {
            if let Some((found, kind)) = marker::status_of(classifier, registry, text) {
                self.annotate(buffer, index, found.span, kind);
                count += 1;
            }
        }

        debug!("rescanned {buffer}: {count} annotations");
        count
    }

    /// Drops the annotation of the cursor line when the cursor touches its
    /// marker, so the raw text is visible while it is edited.
    ///
    /// Returns `true` if an annotation was removed.
    pub fn suppress_if_editing_marker(
        &mut self,
        buffer: BufferId,
        cursor_line: usize,
        cursor_column: usize,
        line_text: &str,
        classifier: &Classifier,
    ) -> bool {
        let Some(found) = classifier.find_marker(line_text) else {
            return false;
        };
        if !found.span.contains_inclusive(cursor_column) {
            return false;
        }

        let removed = self.clear_line(buffer, cursor_line).is_some();
        if removed {
            debug!("suppressed annotation on {buffer} line {cursor_line}");
        }
        removed
    }
}

/// A line split around its overlaid icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlaid<'a> {
    /// Text before the marker
    pub before: &'a str,

    /// Icon, padded with spaces to the marker's display width
    pub icon: String,

    /// Text after the marker
    pub after: &'a str,
}

/// Splits `text` around the annotation's span with the icon drawn over it.
///
/// Returns `None` when the span no longer fits the text.
pub fn overlay<'a>(text: &'a str, annotation: &Annotation) -> Option<Overlaid<'a>> {
    let Span { start, end } = annotation.span;
    let covered = text.get(start..end)?;

    let icon = &annotation.status.icon;
    let pad = covered.width().saturating_sub(icon.width());

    Some(Overlaid {
        before: &text[..start],
        icon: format!("{icon}{}", " ".repeat(pad)),
        after: &text[end..],
    })
}

/// Renders `text` as displayed, with the annotation's icon overlaid.
pub fn render_line(text: &str, annotation: Option<&Annotation>) -> String {
    annotation
        .and_then(|a| overlay(text, a))
        .map_or_else(
            || text.to_string(),
            |o| format!("{}{}{}", o.before, o.icon, o.after),
        )
}
