//! Terminal event handling.
//!
//! Wraps crossterm's event polling into the events the TUI screens consume.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Default polling interval before a tick is emitted.
const DEFAULT_TICK_RATE: Duration = Duration::from_millis(250);

/// An event delivered to a TUI screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Text was pasted (bracketed paste)
    Paste(String),
    /// The terminal was resized
    Resize(u16, u16),
    /// The terminal window regained focus
    FocusGained,
    /// No input arrived within the tick interval
    Tick,
}

/// Polls the terminal for events.
pub struct EventHandler {
    tick_rate: Duration,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_RATE)
    }
}

impl EventHandler {
    pub const fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Blocks until the next event, or returns [`TuiEvent::Tick`] on timeout.
    pub fn next(&self) -> Result<TuiEvent> {
        loop {
            if !event::poll(self.tick_rate)? {
                return Ok(TuiEvent::Tick);
            }
            if let Some(event) = convert(event::read()?) {
                return Ok(event);
            }
        }
    }
}

/// Maps a crossterm event, dropping key releases and events no screen uses.
fn convert(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => Some(TuiEvent::Key(key)),
        Event::Paste(text) => Some(TuiEvent::Paste(text)),
        Event::Resize(width, height) => Some(TuiEvent::Resize(width, height)),
        Event::FocusGained => Some(TuiEvent::FocusGained),
        _ => None,
    }
}
