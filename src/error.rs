//! # Errors
//!
//! Domain errors raised by the marker core and the status registry.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use thiserror::Error;

/// Errors produced while classifying, editing, or registering statuses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkError {
    /// The line does not start with a lead token.
    #[error("line is not a bullet or heading")]
    NotEligible,

    /// The marker could not be found right after it was written.
    #[error("marker could not be recovered after edit")]
    InternalInconsistency,

    /// No status is registered under this name.
    #[error("unknown status '{0}'")]
    UnknownStatus(String),

    /// Two statuses share a literal character.
    #[error("statuses '{first}' and '{second}' share the literal '{literal}'")]
    DuplicateLiteral {
        literal: char,
        first: String,
        second: String,
    },

    /// Two statuses share a name.
    #[error("status '{0}' is registered twice")]
    DuplicateName(String),

    /// The literal is not usable inside a marker.
    #[error("status '{name}' has an invalid literal {literal:?} (must be one character, not a parenthesis)")]
    InvalidLiteral { name: String, literal: String },

    /// The marker pattern built from the registry failed to compile.
    #[error("invalid marker pattern: {0}")]
    InvalidPattern(String),
}

/// Convenience alias for results carrying a [`MarkError`].
pub type MarkResult<T> = std::result::Result<T, MarkError>;
