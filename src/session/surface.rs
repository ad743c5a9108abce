//! Editing surface abstraction.
//!
//! The marker session only needs line access, a cursor and the current mode.
//! Anything that can provide these (the in-memory [`Document`](crate::document::Document),
//! a terminal editor, a test double) can host a session.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::overlay::BufferId;

/// Zero-based cursor position. `column` is a byte offset into the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub line: usize,
    pub column: usize,
}

impl Cursor {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Editing mode of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Insert,
}

/// A buffer with a cursor.
pub trait Surface {
    /// Identifier used to scope annotations.
    fn buffer_id(&self) -> BufferId;

    /// All lines of the buffer.
    fn lines(&self) -> &[String];

    /// Replaces the text of one line. Returns `false` if the line does not exist.
    fn set_line(&mut self, index: usize, text: String) -> bool;

    fn cursor(&self) -> Cursor;

    fn set_cursor(&mut self, cursor: Cursor);

    fn mode(&self) -> Mode;

    /// Text of one line.
    fn line(&self, index: usize) -> Option<&str> {
        self.lines().get(index).map(String::as_str)
    }

    /// Text of the cursor line.
    fn current_line(&self) -> Option<&str> {
        self.line(self.cursor().line)
    }
}
