//! # Document
//!
//! An in-memory markdown buffer backed by a file, with a cursor and an edit
//! mode. This is the editing surface used by the CLI commands and the
//! interactive editor.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    path::{Path, PathBuf},
    sync::atomic::{AtomicU64, Ordering},
};

use anyhow::{Context, Result};

use crate::{
    overlay::BufferId,
    session::{floor_char_boundary, Cursor, Mode, Surface},
};

static NEXT_BUFFER_ID: AtomicU64 = AtomicU64::new(1);

fn next_buffer_id() -> BufferId {
    BufferId(NEXT_BUFFER_ID.fetch_add(1, Ordering::Relaxed))
}

/// A text buffer split into lines.
#[derive(Debug, Clone)]
pub struct Document {
    id: BufferId,
    path: Option<PathBuf>,
    lines: Vec<String>,
    trailing_newline: bool,
    line_ending: &'static str,
    cursor: Cursor,
    mode: Mode,
    modified: bool,
}

impl Document {
    /// Creates a document from text. An empty text still has one empty line.
    pub fn from_text(text: &str) -> Self {
        let trailing_newline = text.ends_with('\n');
        // The first line decides the ending for the whole buffer
        let line_ending = match text.find('\n') {
            Some(end) if text[..end].ends_with('\r') => "\r\n",
            _ => "\n",
        };
        let mut lines: Vec<String> = text.lines().map(String::from).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }

        Self {
            id: next_buffer_id(),
            path: None,
            lines,
            trailing_newline,
            line_ending,
            cursor: Cursor::default(),
            mode: Mode::Normal,
            modified: false,
        }
    }

    /// Loads a document from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let mut document = Self::from_text(&text);
        document.path = Some(path.to_path_buf());
        Ok(document)
    }

    /// Writes the document back to the file it was loaded from.
    pub fn save(&mut self) -> Result<()> {
        let path = self
            .path
            .clone()
            .context("Document has no file path")?;
        self.save_to(&path)
    }

    /// Writes the document to `path`, preserving the original line ending and
    /// trailing newline.
    pub fn save_to(&mut self, path: &Path) -> Result<()> {
        std::fs::write(path, self.text())
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        self.modified = false;
        Ok(())
    }

    /// Full text of the document.
    pub fn text(&self) -> String {
        let mut text = self.lines.join(self.line_ending);
        if self.trailing_newline {
            text.push_str(self.line_ending);
        }
        text
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub const fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        // Normal mode keeps the cursor on a character
        if mode == Mode::Normal {
            let line = &self.lines[self.cursor.line];
            if self.cursor.column >= line.len() && !line.is_empty() {
                self.cursor.column = prev_char_boundary(line, line.len());
            }
        }
    }

    // -------------------------------------------------------------------------
    // Cursor movement
    // -------------------------------------------------------------------------

    pub fn move_up(&mut self) {
        if self.cursor.line > 0 {
            self.set_cursor(Cursor::new(self.cursor.line - 1, self.cursor.column));
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor.line + 1 < self.lines.len() {
            self.set_cursor(Cursor::new(self.cursor.line + 1, self.cursor.column));
        }
    }

    pub fn move_left(&mut self) {
        let line = &self.lines[self.cursor.line];
        self.cursor.column = prev_char_boundary(line, self.cursor.column);
    }

    pub fn move_right(&mut self) {
        let line = &self.lines[self.cursor.line];
        let next = next_char_boundary(line, self.cursor.column);
        let limit = match self.mode {
            Mode::Insert => line.len(),
            Mode::Normal => prev_char_boundary(line, line.len()),
        };
        self.cursor.column = next.min(limit.max(self.cursor.column));
    }

    // -------------------------------------------------------------------------
    // Text editing (insert mode)
    // -------------------------------------------------------------------------

    /// Inserts a character at the cursor and moves past it.
    pub fn insert_char(&mut self, c: char) {
        let Cursor { line, column } = self.cursor;
        self.lines[line].insert(column, c);
        self.cursor.column = column + c.len_utf8();
        self.modified = true;
    }

    /// Deletes the character before the cursor, joining with the previous
    /// line at column zero. Returns `true` if a line was removed.
    pub fn backspace(&mut self) -> bool {
        let Cursor { line, column } = self.cursor;
        if column > 0 {
            let start = prev_char_boundary(&self.lines[line], column);
            self.lines[line].replace_range(start..column, "");
            self.cursor.column = start;
            self.modified = true;
            false
        } else if line > 0 {
            let current = self.lines.remove(line);
            let previous = &mut self.lines[line - 1];
            let join_at = previous.len();
            previous.push_str(&current);
            self.cursor = Cursor::new(line - 1, join_at);
            self.modified = true;
            true
        } else {
            false
        }
    }

    /// Splits the line at the cursor, moving to the start of the new line.
    pub fn split_line(&mut self) {
        let Cursor { line, column } = self.cursor;
        let rest = self.lines[line].split_off(column);
        self.lines.insert(line + 1, rest);
        self.cursor = Cursor::new(line + 1, 0);
        self.modified = true;
    }
}

impl Surface for Document {
    fn buffer_id(&self) -> BufferId {
        self.id
    }

    fn lines(&self) -> &[String] {
        &self.lines
    }

    fn set_line(&mut self, index: usize, text: String) -> bool {
        match self.lines.get_mut(index) {
            Some(line) => {
                if *line != text {
                    *line = text;
                    self.modified = true;
                }
                true
            }
            None => false,
        }
    }

    fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Moves the cursor, clamping it into the buffer and onto a char boundary.
    fn set_cursor(&mut self, cursor: Cursor) {
        let line = cursor.line.min(self.lines.len() - 1);
        let text = &self.lines[line];
        let column = floor_char_boundary(text, cursor.column);
        self.cursor = Cursor::new(line, column);
    }

    fn mode(&self) -> Mode {
        self.mode
    }
}

fn prev_char_boundary(text: &str, index: usize) -> usize {
    if index == 0 {
        return 0;
    }
    floor_char_boundary(text, index - 1)
}

fn next_char_boundary(text: &str, index: usize) -> usize {
    text[index..]
        .chars()
        .next()
        .map_or(index, |c| index + c.len_utf8())
}
