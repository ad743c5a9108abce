//! # Terminal UI
//!
//! Full-screen terminal screens built on ratatui. A screen implements
//! [`TuiApp`]; [`run`] owns the terminal and feeds it events until the
//! screen finishes.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod editor;
pub mod event;
pub mod terminal;

use anyhow::Result;
use ratatui::Frame;

use crate::tui::{
    event::{EventHandler, TuiEvent},
    terminal::TerminalGuard,
};

/// How a screen finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppResult<T> {
    /// The screen completed with a value
    Done(T),
    /// The user aborted (Ctrl+C)
    Cancelled,
}

/// A full-screen terminal screen.
pub trait TuiApp {
    /// Value produced when the screen completes.
    type Output;

    /// Handles one event. Returning `Some` ends the screen.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<AppResult<Self::Output>>;

    /// Draws the screen.
    fn render(&mut self, frame: &mut Frame);
}

/// Runs `app` until it finishes.
///
/// Returns `Ok(Some(output))` when the screen completed and `Ok(None)` when
/// it was cancelled. The screen is only redrawn after input, not on ticks.
pub fn run<A: TuiApp>(app: &mut A) -> Result<Option<A::Output>> {
    let mut terminal = TerminalGuard::new()?;
    let events = EventHandler::default();
    let mut dirty = true;

    loop {
        if dirty {
            terminal.terminal().draw(|frame| app.render(frame))?;
        }

        let event = events.next()?;
        if let Some(result) = app.handle_event(&event) {
            return Ok(match result {
                AppResult::Done(output) => Some(output),
                AppResult::Cancelled => None,
            });
        }
        dirty = event != TuiEvent::Tick;
    }
}
