//! Interactive markdown editor screen.
//!
//! A small modal editor over a [`Document`]: normal mode sets statuses with
//! single keys, insert mode edits text. Status icons are drawn over their
//! markers except where the cursor is editing one.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{error, info};
use owo_colors::AnsiColors;
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::{
    document::Document,
    overlay::overlay,
    session::{EditorEvent, Keymap, Mode, Session, Surface},
    tui::{event::TuiEvent, run, AppResult, TuiApp},
    ui::highlight_color,
};

/// A line shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Info(String),
    Error(String),
}

/// Editor screen state.
pub struct EditorScreen {
    session: Session<Document>,
    keymap: Keymap,
    message: Option<Message>,
    scroll: usize,
    quit_armed: bool,
}

impl EditorScreen {
    pub fn new(session: Session<Document>, keymap: Keymap) -> Self {
        let mut screen = Self {
            session,
            keymap,
            message: None,
            scroll: 0,
            quit_armed: false,
        };
        screen.dispatch(&EditorEvent::WindowEnter);
        screen
    }

    pub const fn session(&self) -> &Session<Document> {
        &self.session
    }

    pub const fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    fn document(&mut self) -> &mut Document {
        self.session.surface_mut()
    }

    /// Dispatches an event, reporting failures in the status bar.
    fn dispatch(&mut self, event: &EditorEvent) {
        if let Err(err) = self.session.dispatch(event) {
            self.message = Some(Message::Error(err.to_string()));
        }
    }

    fn set_status(&mut self, name: &str) {
        let line = self.session.surface().cursor().line + 1;
        match self.session.dispatch(&EditorEvent::SetStatus(name.to_string())) {
            Ok(true) => self.message = Some(Message::Info(format!("Line {line}: {name}"))),
            Ok(false) => {
                self.message = Some(Message::Error(format!(
                    "Line {line} is not a bullet or heading"
                )));
            }
            Err(err) => self.message = Some(Message::Error(err.to_string())),
        }
    }

    fn save(&mut self) {
        match self.document().save() {
            Ok(()) => {
                let path = self
                    .session
                    .surface()
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                info!("saved {path}");
                self.message = Some(Message::Info(format!("Saved {path}")));
            }
            Err(err) => {
                error!("save failed: {err:#}");
                self.message = Some(Message::Error(format!("{err:#}")));
            }
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Option<AppResult<()>> {
        if key.code != KeyCode::Char('q') {
            self.quit_armed = false;
        }

        match key.code {
            KeyCode::Char('q') => {
                if self.session.surface().is_modified() && !self.quit_armed {
                    self.quit_armed = true;
                    self.message = Some(Message::Error(
                        "Unsaved changes; press q again to discard them".to_string(),
                    ));
                    return None;
                }
                return Some(AppResult::Done(()));
            }
            KeyCode::Char('s') => self.save(),
            KeyCode::Char('i') => {
                self.document().set_mode(Mode::Insert);
                self.dispatch(&EditorEvent::InsertEnter);
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.document().move_down();
                self.dispatch(&EditorEvent::CursorMoved);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.document().move_up();
                self.dispatch(&EditorEvent::CursorMoved);
            }
            KeyCode::Left => {
                self.document().move_left();
                self.dispatch(&EditorEvent::CursorMoved);
            }
            KeyCode::Right => {
                self.document().move_right();
                self.dispatch(&EditorEvent::CursorMoved);
            }
            KeyCode::Char(c) => {
                if let Some(name) = self.keymap.status_for(c).map(String::from) {
                    self.set_status(&name);
                }
            }
            _ => {}
        }
        None
    }

    fn handle_insert_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.document().set_mode(Mode::Normal);
                self.dispatch(&EditorEvent::InsertLeave);
            }
            KeyCode::Char(c) => {
                self.document().insert_char(c);
                self.dispatch(&EditorEvent::TextChanged);
            }
            KeyCode::Backspace => {
                let joined = self.document().backspace();
                self.dispatch(if joined {
                    &EditorEvent::LinesChanged
                } else {
                    &EditorEvent::TextChanged
                });
            }
            KeyCode::Enter => {
                self.document().split_line();
                self.dispatch(&EditorEvent::LinesChanged);
            }
            KeyCode::Up => {
                self.document().move_up();
                self.dispatch(&EditorEvent::CursorMoved);
            }
            KeyCode::Down => {
                self.document().move_down();
                self.dispatch(&EditorEvent::CursorMoved);
            }
            KeyCode::Left => {
                self.document().move_left();
                self.dispatch(&EditorEvent::CursorMoved);
            }
            KeyCode::Right => {
                self.document().move_right();
                self.dispatch(&EditorEvent::CursorMoved);
            }
            _ => {}
        }
    }

    fn paste(&mut self, text: &str) {
        if self.session.surface().mode() != Mode::Insert {
            return;
        }

        let mut split = false;
        for c in text.chars() {
            match c {
                '\n' => {
                    self.document().split_line();
                    split = true;
                }
                '\r' => {}
                c => self.document().insert_char(c),
            }
        }
        self.dispatch(if split {
            &EditorEvent::LinesChanged
        } else {
            &EditorEvent::TextChanged
        });
    }

    /// Keeps the cursor line within `height` visible rows.
    fn scroll_to_cursor(&mut self, height: usize) {
        let line = self.session.surface().cursor().line;
        if line < self.scroll {
            self.scroll = line;
        } else if height > 0 && line >= self.scroll + height {
            self.scroll = line + 1 - height;
        }
    }

    fn render_text(&self, frame: &mut Frame, area: Rect) {
        let surface = self.session.surface();
        let buffer = surface.buffer_id();

        let lines: Vec<Line> = surface
            .lines()
            .iter()
            .enumerate()
            .skip(self.scroll)
            .take(area.height as usize)
            .map(|(index, text)| {
                let annotation = self.session.annotator().get(buffer, index);
                match annotation.and_then(|a| overlay(text, a).map(|o| (a, o))) {
                    Some((a, o)) => Line::from(vec![
                        Span::raw(o.before),
                        Span::styled(
                            o.icon,
                            Style::default()
                                .fg(to_color(highlight_color(&a.status.highlight)))
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(o.after),
                    ]),
                    None => Line::raw(text.as_str()),
                }
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);

        let cursor = surface.cursor();
        if let Some(text) = surface.line(cursor.line) {
            let column = text.get(..cursor.column).map_or(0, UnicodeWidthStr::width);
            let row = cursor.line.saturating_sub(self.scroll);
            frame.set_cursor_position(Position::new(
                area.x.saturating_add(u16::try_from(column).unwrap_or(u16::MAX)),
                area.y.saturating_add(u16::try_from(row).unwrap_or(u16::MAX)),
            ));
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let surface = self.session.surface();
        let cursor = surface.cursor();

        let (mode, mode_style) = match surface.mode() {
            Mode::Normal => (" NORMAL ", Style::default().fg(Color::Black).bg(Color::Blue)),
            Mode::Insert => (" INSERT ", Style::default().fg(Color::Black).bg(Color::Green)),
        };
        let name = surface
            .path()
            .map_or_else(|| "[scratch]".to_string(), |p| p.display().to_string());
        let modified = if surface.is_modified() { " [+]" } else { "" };

        let mut spans = vec![
            Span::styled(mode, mode_style.add_modifier(Modifier::BOLD)),
            Span::raw(format!(" {name}{modified} ")),
            Span::styled(
                format!("{}:{} ", cursor.line + 1, cursor.column + 1),
                Style::default().fg(Color::DarkGray),
            ),
        ];
        match &self.message {
            Some(Message::Info(text)) => spans.push(Span::raw(text.as_str())),
            Some(Message::Error(text)) => {
                spans.push(Span::styled(text.as_str(), Style::default().fg(Color::Red)));
            }
            None => {}
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

impl TuiApp for EditorScreen {
    type Output = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<AppResult<Self::Output>> {
        match event {
            TuiEvent::Key(key) => {
                // Handle Ctrl+C
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Some(AppResult::Cancelled);
                }
                if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    self.save();
                    return None;
                }

                match self.session.surface().mode() {
                    Mode::Normal => self.handle_normal_key(*key),
                    Mode::Insert => {
                        self.handle_insert_key(*key);
                        None
                    }
                }
            }
            TuiEvent::Paste(text) => {
                self.paste(text);
                None
            }
            TuiEvent::FocusGained => {
                self.dispatch(&EditorEvent::WindowEnter);
                None
            }
            TuiEvent::Resize(..) | TuiEvent::Tick => None,
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let [text_area, status_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

        self.scroll_to_cursor(text_area.height as usize);
        self.render_text(frame, text_area);
        self.render_status_bar(frame, status_area);
    }
}

/// Terminal color of a highlight group, for ratatui.
const fn to_color(color: AnsiColors) -> Color {
    match color {
        AnsiColors::Black => Color::Black,
        AnsiColors::Red => Color::Red,
        AnsiColors::Green => Color::Green,
        AnsiColors::Yellow => Color::Yellow,
        AnsiColors::Blue => Color::Blue,
        AnsiColors::Magenta => Color::Magenta,
        AnsiColors::Cyan => Color::Cyan,
        AnsiColors::White => Color::White,
        AnsiColors::BrightBlack => Color::DarkGray,
        AnsiColors::BrightRed => Color::LightRed,
        AnsiColors::BrightGreen => Color::LightGreen,
        AnsiColors::BrightYellow => Color::LightYellow,
        AnsiColors::BrightBlue => Color::LightBlue,
        AnsiColors::BrightMagenta => Color::LightMagenta,
        AnsiColors::BrightCyan => Color::LightCyan,
        AnsiColors::BrightWhite => Color::Gray,
        AnsiColors::Default => Color::Reset,
    }
}

/// Runs the editor until the user quits.
///
/// Returns the editor so the caller can inspect the final document.
pub fn edit(session: Session<Document>, keymap: Keymap) -> Result<EditorScreen> {
    let mut screen = EditorScreen::new(session, keymap);
    run(&mut screen)?;
    Ok(screen)
}
