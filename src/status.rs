//! # Status
//!
//! The registered set of todo statuses. Each status owns the single character
//! written inside a marker, the icon drawn over it, and a highlight group.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::fmt;

use crate::{
    constants::{DEFAULT_STATUSES, MARKER_CLOSE, MARKER_OPEN},
    error::{MarkError, MarkResult},
};

/// A named todo status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusKind {
    /// Canonical name (e.g. `done`)
    pub name: String,

    /// Character written between the marker parentheses
    pub literal: char,

    /// Icon rendered over the marker
    pub icon: String,

    /// Highlight group used to color the icon
    pub highlight: String,
}

impl StatusKind {
    pub fn new(
        name: impl Into<String>,
        literal: char,
        icon: impl Into<String>,
        highlight: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            literal,
            icon: icon.into(),
            highlight: highlight.into(),
        }
    }

    /// Returns the marker text for this status, e.g. `(x)`.
    pub fn marker(&self) -> String {
        format!("{MARKER_OPEN}{}{MARKER_CLOSE}", self.literal)
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Lookup table of statuses with mutually exclusive names and literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRegistry {
    kinds: Vec<StatusKind>,
}

impl Default for StatusRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl StatusRegistry {
    /// Builds a registry, rejecting duplicate names, duplicate literals and
    /// literals that would break the marker syntax.
    pub fn new(kinds: Vec<StatusKind>) -> MarkResult<Self> {
        for (i, kind) in kinds.iter().enumerate() {
            if kind.literal == MARKER_OPEN || kind.literal == MARKER_CLOSE {
                return Err(MarkError::InvalidLiteral {
                    name: kind.name.clone(),
                    literal: kind.literal.to_string(),
                });
            }
            for earlier in &kinds[..i] {
                if normalize_name(&earlier.name) == normalize_name(&kind.name) {
                    return Err(MarkError::DuplicateName(kind.name.clone()));
                }
                if earlier.literal == kind.literal {
                    return Err(MarkError::DuplicateLiteral {
                        literal: kind.literal,
                        first: earlier.name.clone(),
                        second: kind.name.clone(),
                    });
                }
            }
        }
        Ok(Self { kinds })
    }

    /// The built-in status set.
    pub fn builtin() -> Self {
        let kinds = DEFAULT_STATUSES
            .iter()
            .map(|&(name, literal, icon, highlight)| {
                StatusKind::new(name, literal, icon, highlight)
            })
            .collect();
        Self { kinds }
    }

    /// Returns a registry with `kind` replacing the status of the same name,
    /// or appended when the name is new.
    pub fn with_status(&self, kind: StatusKind) -> MarkResult<Self> {
        let mut kinds = self.kinds.clone();
        let key = normalize_name(&kind.name);
        match kinds.iter_mut().find(|k| normalize_name(&k.name) == key) {
            Some(existing) => *existing = kind,
            None => kinds.push(kind),
        }
        Self::new(kinds)
    }

    /// Finds a status by name. `On-Hold`, `on-hold` and `on_hold` are equivalent.
    pub fn by_name(&self, name: &str) -> Option<&StatusKind> {
        let key = normalize_name(name);
        self.kinds.iter().find(|k| normalize_name(&k.name) == key)
    }

    /// Like [`by_name`](Self::by_name) but reports unknown names as an error.
    pub fn resolve(&self, name: &str) -> MarkResult<&StatusKind> {
        self.by_name(name)
            .ok_or_else(|| MarkError::UnknownStatus(name.to_string()))
    }

    /// Finds the status written with `literal`.
    pub fn by_literal(&self, literal: char) -> Option<&StatusKind> {
        self.kinds.iter().find(|k| k.literal == literal)
    }

    /// All literal characters, in registration order.
    pub fn literals(&self) -> impl Iterator<Item = char> + '_ {
        self.kinds.iter().map(|k| k.literal)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StatusKind> {
        self.kinds.iter()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl<'a> IntoIterator for &'a StatusRegistry {
    type Item = &'a StatusKind;
    type IntoIter = std::slice::Iter<'a, StatusKind>;

    fn into_iter(self) -> Self::IntoIter {
        self.kinds.iter()
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase().replace('-', "_")
}
