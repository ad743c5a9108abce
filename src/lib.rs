//! # todomark
//!
//! Todo status markers for markdown bullets and headings.
//!
//! A line like `- write tests` or `## Release` can carry a status marker
//! right after its lead token: `- (x) write tests`. todomark sets and
//! rewrites those markers, and draws each one as a status icon when the file
//! is displayed or edited.
//!
//! ## Features
//!
//! - **Classifier**: Detects the lead token and existing marker of a line
//! - **Marker Editor**: Inserts or replaces markers, normalizing their padding
//! - **Annotator**: Tracks which lines show an icon, per buffer
//! - **Session**: Keeps annotations in sync with an editing surface
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod classify;
pub mod commands;
pub mod config;
pub mod constants;
pub mod document;
pub mod error;
pub mod logging;
pub mod marker;
pub mod overlay;
pub mod session;
pub mod status;
pub mod tui;
pub mod ui;

pub use classify::{Classification, Classifier, Marker, Span};
pub use config::{set_home_override, Config};
pub use document::Document;
pub use error::{MarkError, MarkResult};
pub use overlay::{Annotation, Annotator, BufferId};
pub use session::{Session, Surface};
pub use status::{StatusKind, StatusRegistry};
