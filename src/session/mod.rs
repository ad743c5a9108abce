//! # Session
//!
//! Ties a [`Surface`] to the classifier, marker editor and annotator. Events
//! are first mapped to an [`Action`] by [`handle_event`], then applied here.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod event;
pub mod keymap;
pub mod surface;

use log::{debug, error};

pub use self::{
    event::{handle_event, Action, EditorEvent, EventContext},
    keymap::Keymap,
    surface::{Cursor, Mode, Surface},
};
use crate::{
    classify::Classifier,
    error::{MarkError, MarkResult},
    marker,
    overlay::Annotator,
    status::{StatusKind, StatusRegistry},
};

/// An editing surface with its marker annotations.
pub struct Session<S: Surface> {
    surface: S,
    classifier: Classifier,
    registry: StatusRegistry,
    annotator: Annotator,
}

impl<S: Surface> Session<S> {
    /// Creates a session and annotates every marker already in the buffer.
    pub fn new(surface: S, classifier: Classifier, registry: StatusRegistry) -> Self {
        let mut session = Self {
            surface,
            classifier,
            registry,
            annotator: Annotator::new(),
        };
        session.resync_annotations();
        session
    }

    pub const fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub const fn annotator(&self) -> &Annotator {
        &self.annotator
    }

    pub const fn registry(&self) -> &StatusRegistry {
        &self.registry
    }

    pub const fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Handles an event end to end.
    ///
    /// Returns `Ok(false)` only when a status could not be set because the
    /// cursor line is not eligible.
    pub fn dispatch(&mut self, event: &EditorEvent) -> MarkResult<bool> {
        let ctx = EventContext {
            mode: self.surface.mode(),
            cursor: self.surface.cursor(),
        };
        let action = handle_event(event, &ctx);
        debug!("{event:?} -> {action:?}");
        self.apply(action)
    }

    /// Performs the effects of an action.
    pub fn apply(&mut self, action: Action) -> MarkResult<bool> {
        match action {
            Action::None => {}
            Action::Resync => self.resync_annotations(),
            Action::Suppress(cursor) => self.suppress_at(cursor),
            Action::RefreshLine(cursor) => {
                self.refresh_line(cursor.line);
                self.suppress_at(cursor);
            }
            Action::ResyncAndSuppress(cursor) => {
                self.resync_annotations();
                self.suppress_at(cursor);
            }
            Action::SetStatus(name) => return self.set_status_named(&name),
        }
        Ok(true)
    }

    /// Sets the status of the cursor line, looked up by name.
    pub fn set_status_named(&mut self, name: &str) -> MarkResult<bool> {
        let kind = self.registry.resolve(name)?.clone();
        self.set_status(&kind)
    }

    /// Sets the status of the cursor line.
    ///
    /// Returns `Ok(false)` without touching the buffer when the line is not
    /// a bullet or heading. The annotation is only updated once the new text
    /// and its marker span are both known.
    pub fn set_status(&mut self, kind: &StatusKind) -> MarkResult<bool> {
        let cursor = self.surface.cursor();
        let Some(line) = self.surface.current_line() else {
            return Ok(false);
        };
        let old_len = line.len();

        let marked = match marker::set_status(&self.classifier, line, kind) {
            Ok(marked) => marked,
            Err(MarkError::NotEligible) => {
                debug!("line {} is not eligible for a marker", cursor.line);
                return Ok(false);
            }
            Err(err) => {
                error!("failed to set {kind} on line {}: {err}", cursor.line);
                return Err(err);
            }
        };

        // Keep the cursor on the same character when it sits after the edit
        let column = if cursor.column >= marked.marker.span.start {
            let shifted = (cursor.column + marked.text.len()).saturating_sub(old_len);
            floor_char_boundary(&marked.text, shifted)
        } else {
            cursor.column
        };

        if !self.surface.set_line(cursor.line, marked.text) {
            error!("line {} vanished while setting {kind}", cursor.line);
            return Err(MarkError::InternalInconsistency);
        }
        self.surface.set_cursor(Cursor::new(cursor.line, column));

        self.annotator
            .annotate(self.surface.buffer_id(), cursor.line, marked.marker.span, kind);
        Ok(true)
    }

    /// Rebuilds every annotation of the buffer from its text.
    pub fn resync_annotations(&mut self) {
        let lines = self.surface.lines().iter().map(String::as_str);
        self.annotator.rescan(
            self.surface.buffer_id(),
            lines,
            &self.classifier,
            &self.registry,
        );
    }

    fn refresh_line(&mut self, index: usize) {
        let buffer = self.surface.buffer_id();
        self.annotator.clear_line(buffer, index);
        if let Some(text) = self.surface.line(index) {
            if let Some((found, kind)) = marker::status_of(&self.classifier, &self.registry, text) {
                self.annotator.annotate(buffer, index, found.span, kind);
            }
        }
    }

    fn suppress_at(&mut self, cursor: Cursor) {
        let buffer = self.surface.buffer_id();
        if let Some(text) = self.surface.line(cursor.line) {
            self.annotator.suppress_if_editing_marker(
                buffer,
                cursor.line,
                cursor.column,
                text,
                &self.classifier,
            );
        }
    }
}

/// Largest char boundary of `text` not after `index`.
pub(crate) fn floor_char_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}
