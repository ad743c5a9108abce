//! Editor events and the actions they map to.
//!
//! [`handle_event`] is pure: it only looks at the event and a snapshot of the
//! surface, so the dispatch rules are testable without a buffer.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use super::surface::{Cursor, Mode};

/// Something that happened on the editing surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// Edit mode was entered
    InsertEnter,
    /// Edit mode was left
    InsertLeave,
    /// The viewport gained focus or was (re)opened
    WindowEnter,
    /// The cursor moved without changing text
    CursorMoved,
    /// The cursor line's text changed
    TextChanged,
    /// Lines were inserted or removed
    LinesChanged,
    /// A key bound to a status was pressed
    SetStatus(String),
}

/// Snapshot of the surface an event is handled against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventContext {
    pub mode: Mode,
    pub cursor: Cursor,
}

/// Effect to perform in response to an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Nothing to do
    None,
    /// Rebuild every annotation of the buffer
    Resync,
    /// Hide the annotation at the cursor if it sits on a marker
    Suppress(Cursor),
    /// Re-annotate one line, then hide it if the cursor sits on its marker
    RefreshLine(Cursor),
    /// Rebuild every annotation, then hide the one under the cursor
    ResyncAndSuppress(Cursor),
    /// Write a status marker on the cursor line
    SetStatus(String),
}

/// Maps an event to the action that keeps annotations in sync.
pub fn handle_event(event: &EditorEvent, ctx: &EventContext) -> Action {
    let editing = ctx.mode == Mode::Insert;

    match event {
        EditorEvent::InsertEnter => Action::Suppress(ctx.cursor),
        EditorEvent::InsertLeave | EditorEvent::WindowEnter => Action::Resync,
        EditorEvent::CursorMoved if editing => Action::ResyncAndSuppress(ctx.cursor),
        EditorEvent::CursorMoved => Action::None,
        EditorEvent::TextChanged if editing => Action::RefreshLine(ctx.cursor),
        EditorEvent::LinesChanged if editing => Action::ResyncAndSuppress(ctx.cursor),
        EditorEvent::TextChanged | EditorEvent::LinesChanged => Action::Resync,
        EditorEvent::SetStatus(name) => Action::SetStatus(name.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(mode: Mode) -> EventContext {
        EventContext {
            mode,
            cursor: Cursor::new(3, 4),
        }
    }

    #[test]
    fn test_insert_enter_suppresses_at_cursor() {
        assert_eq!(
            handle_event(&EditorEvent::InsertEnter, &ctx(Mode::Insert)),
            Action::Suppress(Cursor::new(3, 4))
        );
    }

    #[test]
    fn test_leaving_insert_resyncs() {
        assert_eq!(
            handle_event(&EditorEvent::InsertLeave, &ctx(Mode::Normal)),
            Action::Resync
        );
        assert_eq!(
            handle_event(&EditorEvent::WindowEnter, &ctx(Mode::Normal)),
            Action::Resync
        );
    }

    #[test]
    fn test_cursor_moves_only_matter_while_editing() {
        assert_eq!(
            handle_event(&EditorEvent::CursorMoved, &ctx(Mode::Normal)),
            Action::None
        );
        assert_eq!(
            handle_event(&EditorEvent::CursorMoved, &ctx(Mode::Insert)),
            Action::ResyncAndSuppress(Cursor::new(3, 4))
        );
    }

    #[test]
    fn test_text_changes() {
        assert_eq!(
            handle_event(&EditorEvent::TextChanged, &ctx(Mode::Insert)),
            Action::RefreshLine(Cursor::new(3, 4))
        );
        assert_eq!(
            handle_event(&EditorEvent::LinesChanged, &ctx(Mode::Insert)),
            Action::ResyncAndSuppress(Cursor::new(3, 4))
        );
        assert_eq!(
            handle_event(&EditorEvent::TextChanged, &ctx(Mode::Normal)),
            Action::Resync
        );
    }

    #[test]
    fn test_set_status_passes_through() {
        assert_eq!(
            handle_event(&EditorEvent::SetStatus("done".into()), &ctx(Mode::Normal)),
            Action::SetStatus("done".into())
        );
    }
}
