//! # Line Classifier
//!
//! Decides whether a single line is a todo candidate and locates its status
//! marker. A line qualifies when, after optional indentation, it starts with
//! one of the lead tokens (headings or a bullet). The marker is the first
//! `(c)` after the lead token whose `c` is a registered literal, optionally
//! padded with one space on either side: `( c )`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use log::trace;
use regex::Regex;

use crate::{
    constants::DEFAULT_LEAD_TOKENS,
    error::{MarkError, MarkResult},
    status::StatusRegistry,
};

/// Byte range `start..end` within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `column` touches the span, counting both edges.
    ///
    /// A caret sitting directly after the closing parenthesis is inside.
    pub const fn contains_inclusive(&self, column: usize) -> bool {
        self.start <= column && column <= self.end
    }
}

/// A status marker found in a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    /// Span covering the parentheses and any padding
    pub span: Span,

    /// The status literal between the parentheses
    pub literal: char,
}

/// Result of classifying an eligible line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Span of the matched lead token
    pub lead: Span,

    /// Existing marker, if any
    pub marker: Option<Marker>,
}

/// Line classifier built from a lead token list and a status registry.
#[derive(Debug, Clone)]
pub struct Classifier {
    lead_tokens: Vec<String>,
    marker_pattern: Option<Regex>,
}

impl Classifier {
    /// Creates a classifier.
    ///
    /// Lead tokens are ordered longest first so a token is always tried
    /// before any of its prefixes. Empty tokens are ignored.
    pub fn new<I, S>(lead_tokens: I, registry: &StatusRegistry) -> MarkResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lead_tokens: Vec<String> = lead_tokens
            .into_iter()
            .map(Into::into)
            .filter(|t| !t.is_empty())
            .collect();
        // Stable sort keeps configured order among equal lengths
        lead_tokens.sort_by(|a, b| b.len().cmp(&a.len()));

        let marker_pattern = if registry.is_empty() {
            None
        } else {
            let literals: Vec<String> = registry
                .literals()
                .map(|c| regex::escape(&c.to_string()))
                .collect();
            let pattern = format!(r"\( ?({}) ?\)", literals.join("|"));
            Some(Regex::new(&pattern).map_err(|e| MarkError::InvalidPattern(e.to_string()))?)
        };

        Ok(Self {
            lead_tokens,
            marker_pattern,
        })
    }

    /// Classifier with the default lead tokens.
    pub fn with_default_leads(registry: &StatusRegistry) -> MarkResult<Self> {
        Self::new(DEFAULT_LEAD_TOKENS.iter().copied(), registry)
    }

    /// Lead tokens in matching order.
    pub fn lead_tokens(&self) -> &[String] {
        &self.lead_tokens
    }

    /// Returns the span of the lead token, or `None` if the line is not eligible.
    pub fn lead(&self, line: &str) -> Option<Span> {
        let rest = line.trim_start();
        let indent = line.len() - rest.len();

        self.lead_tokens
            .iter()
            .find(|token| rest.starts_with(token.as_str()))
            .map(|token| Span::new(indent, indent + token.len()))
    }

    /// Finds the marker of an eligible line.
    pub fn find_marker(&self, line: &str) -> Option<Marker> {
        self.classify(line).and_then(|c| c.marker)
    }

    /// Classifies a line. `None` means the line is not eligible.
    pub fn classify(&self, line: &str) -> Option<Classification> {
        let lead = self.lead(line)?;
        let marker = self.marker_after(line, lead.end);
        trace!("classified {line:?}: lead={lead:?} marker={marker:?}");
        Some(Classification { lead, marker })
    }

    fn marker_after(&self, line: &str, offset: usize) -> Option<Marker> {
        let pattern = self.marker_pattern.as_ref()?;
        let haystack = line.get(offset..)?;
        let caps = pattern.captures(haystack)?;
        let whole = caps.get(0)?;
        let literal = caps.get(1)?.as_str().chars().next()?;

        Some(Marker {
            span: Span::new(offset + whole.start(), offset + whole.end()),
            literal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> Classifier {
        Classifier::with_default_leads(&StatusRegistry::builtin()).unwrap()
    }

    #[test]
    fn test_bullet_is_eligible() {
        assert_eq!(classifier().lead("- write tests"), Some(Span::new(0, 1)));
    }

    #[test]
    fn test_indented_bullet() {
        assert_eq!(classifier().lead("    - nested"), Some(Span::new(4, 5)));
        assert_eq!(classifier().lead("\t# tabbed"), Some(Span::new(1, 2)));
    }

    #[test]
    fn test_plain_text_not_eligible() {
        assert_eq!(classifier().lead("write tests"), None);
        assert_eq!(classifier().classify("write (x) tests"), None);
        assert_eq!(classifier().lead(""), None);
    }

    #[test]
    fn test_lead_is_a_plain_prefix_match() {
        // Rules and hashtags start with a lead token, so they are eligible
        assert_eq!(classifier().lead("---"), Some(Span::new(0, 1)));
        assert_eq!(classifier().lead("#tag"), Some(Span::new(0, 1)));
        assert!(classifier().classify("---").is_some_and(|c| c.marker.is_none()));
    }

    #[test]
    fn test_longest_heading_wins() {
        let c = classifier();
        assert_eq!(c.lead("###### deep"), Some(Span::new(0, 6)));
        assert_eq!(c.lead("### mid"), Some(Span::new(0, 3)));
        assert_eq!(c.lead("####### deeper"), Some(Span::new(0, 6)));
    }

    #[test]
    fn test_configured_order_is_resorted() {
        let c = Classifier::new(["#", "-", "###"], &StatusRegistry::builtin()).unwrap();
        assert_eq!(c.lead_tokens(), ["###", "#", "-"]);
        assert_eq!(c.lead("### title"), Some(Span::new(0, 3)));
    }

    #[test]
    fn test_empty_tokens_ignored() {
        let c = Classifier::new(["", "-"], &StatusRegistry::builtin()).unwrap();
        assert_eq!(c.lead("plain"), None);
    }

    #[test]
    fn test_finds_marker() {
        let marker = classifier().find_marker("- (x) write tests").unwrap();
        assert_eq!(marker.span, Span::new(2, 5));
        assert_eq!(marker.literal, 'x');
    }

    #[test]
    fn test_finds_padded_marker() {
        let marker = classifier().find_marker("- ( - ) write tests").unwrap();
        assert_eq!(marker.span, Span::new(2, 7));
        assert_eq!(marker.literal, '-');

        let marker = classifier().find_marker("- (x ) a").unwrap();
        assert_eq!(marker.span, Span::new(2, 6));
    }

    #[test]
    fn test_finds_undone_marker() {
        let marker = classifier().find_marker("- ( ) a").unwrap();
        assert_eq!(marker.span, Span::new(2, 5));
        assert_eq!(marker.literal, ' ');
    }

    #[test]
    fn test_unregistered_literal_is_not_a_marker() {
        assert_eq!(classifier().find_marker("- (y) a"), None);
        assert_eq!(classifier().find_marker("- (xx) a"), None);
        assert_eq!(classifier().find_marker("- () a"), None);
    }

    #[test]
    fn test_parenthesized_literal_in_text_counts() {
        let marker = classifier().find_marker("# Release notes (x)").unwrap();
        assert_eq!(marker.span, Span::new(16, 19));
    }

    #[test]
    fn test_multibyte_text_offsets() {
        let line = "- (x) café";
        let marker = classifier().find_marker(line).unwrap();
        assert_eq!(&line[marker.span.start..marker.span.end], "(x)");

        let line = "- café (!)";
        let marker = classifier().find_marker(line).unwrap();
        assert_eq!(&line[marker.span.start..marker.span.end], "(!)");
    }

    #[test]
    fn test_empty_registry_finds_no_marker() {
        let registry = StatusRegistry::new(Vec::new()).unwrap();
        let c = Classifier::with_default_leads(&registry).unwrap();
        let classification = c.classify("- (x) a").unwrap();
        assert_eq!(classification.marker, None);
    }

    #[test]
    fn test_span_contains_inclusive() {
        let span = Span::new(2, 5);
        assert!(!span.contains_inclusive(1));
        assert!(span.contains_inclusive(2));
        assert!(span.contains_inclusive(4));
        assert!(span.contains_inclusive(5));
        assert!(!span.contains_inclusive(6));
    }
}
