//! # Marker Editor
//!
//! Writes a status marker into a line, either inserting a fresh `(c)` right
//! after the lead token or rewriting the existing marker in place.
//!
//! Rewriting always produces the unpadded three-character form, so `( x )`
//! set to pending becomes `(-)`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use log::debug;

use crate::{
    classify::{Classifier, Marker},
    constants::MARKER_SEPARATOR,
    error::{MarkError, MarkResult},
    status::{StatusKind, StatusRegistry},
};

/// A line after its marker has been written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkedLine {
    /// New line text
    pub text: String,

    /// Marker as found in the new text
    pub marker: Marker,
}

/// Sets the status marker of `line` to `kind`.
///
/// Fails with [`MarkError::NotEligible`] when the line has no lead token, and
/// with [`MarkError::InternalInconsistency`] when the written marker cannot be
/// found again in the result.
pub fn set_status(
    classifier: &Classifier,
    line: &str,
    kind: &StatusKind,
) -> MarkResult<MarkedLine> {
    let classification = classifier.classify(line).ok_or(MarkError::NotEligible)?;
    let marker_text = kind.marker();

    let (text, expected_start) = match classification.marker {
        Some(existing) => {
            let mut text = String::with_capacity(line.len());
            text.push_str(&line[..existing.span.start]);
            text.push_str(&marker_text);
            text.push_str(&line[existing.span.end..]);
            (text, existing.span.start)
        }
        None => {
            let at = classification.lead.end;
            let mut text = String::with_capacity(line.len() + marker_text.len() + 1);
            text.push_str(&line[..at]);
            text.push(MARKER_SEPARATOR);
            text.push_str(&marker_text);
            text.push_str(&line[at..]);
            (text, at + MARKER_SEPARATOR.len_utf8())
        }
    };

    let marker = classifier
        .find_marker(&text)
        .filter(|m| m.literal == kind.literal && m.span.start == expected_start)
        .ok_or(MarkError::InternalInconsistency)?;

    debug!("set {} on {line:?} -> {text:?}", kind.name);
    Ok(MarkedLine { text, marker })
}

/// Returns the marker of `line` together with the status it encodes.
pub fn status_of<'r>(
    classifier: &Classifier,
    registry: &'r StatusRegistry,
    line: &str,
) -> Option<(Marker, &'r StatusKind)> {
    let marker = classifier.find_marker(line)?;
    registry.by_literal(marker.literal).map(|kind| (marker, kind))
}
