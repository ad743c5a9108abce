//! # Property Tests
//!
//! Property-based tests for classifying lines and writing status markers.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use proptest::prelude::*;
use todomark::{
    constants::DEFAULT_LEAD_TOKENS, marker::set_status, Classifier, MarkError, StatusKind,
    StatusRegistry,
};

fn markers() -> (StatusRegistry, Classifier) {
    let registry = StatusRegistry::builtin();
    let classifier = Classifier::with_default_leads(&registry).unwrap();
    (registry, classifier)
}

fn kind_strategy() -> impl Strategy<Value = StatusKind> {
    prop::sample::select(StatusRegistry::builtin().iter().cloned().collect::<Vec<_>>())
}

fn lead_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(DEFAULT_LEAD_TOKENS.to_vec())
}

/// Indentation, a lead token and a body without markers.
fn eligible_line_strategy() -> impl Strategy<Value = (String, &'static str, String)> {
    ("[ \t]{0,4}", lead_strategy(), " [a-zA-Z0-9 .,:]{0,24}")
}

proptest! {
    #[test]
    fn set_status_writes_recoverable_marker(
        (indent, lead, body) in eligible_line_strategy(),
        kind in kind_strategy(),
    ) {
        let (_, classifier) = markers();
        let line = format!("{indent}{lead}{body}");

        let marked = set_status(&classifier, &line, &kind).unwrap();
        let found = classifier.find_marker(&marked.text).unwrap();
        prop_assert_eq!(found.literal, kind.literal);
        prop_assert_eq!(found, marked.marker);
        prop_assert_eq!(
            marked.text,
            format!("{indent}{lead} {}{body}", kind.marker())
        );
    }

    #[test]
    fn set_status_is_idempotent(
        (indent, lead, body) in eligible_line_strategy(),
        kind in kind_strategy(),
    ) {
        let (_, classifier) = markers();
        let line = format!("{indent}{lead}{body}");

        let once = set_status(&classifier, &line, &kind).unwrap().text;
        let twice = set_status(&classifier, &once, &kind).unwrap().text;
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn last_status_wins_with_single_marker(
        (indent, lead, body) in eligible_line_strategy(),
        first in kind_strategy(),
        second in kind_strategy(),
    ) {
        let (_, classifier) = markers();
        let line = format!("{indent}{lead}{body}");

        let via_first = set_status(&classifier, &line, &first).unwrap().text;
        let both = set_status(&classifier, &via_first, &second).unwrap().text;
        let direct = set_status(&classifier, &line, &second).unwrap().text;
        prop_assert_eq!(both, direct);
    }

    #[test]
    fn padded_markers_are_normalized(
        (indent, lead, body) in eligible_line_strategy(),
        old in kind_strategy(),
        new in kind_strategy(),
        left in prop::bool::ANY,
        right in prop::bool::ANY,
    ) {
        let (_, classifier) = markers();
        let pad = |on: bool| if on { " " } else { "" };
        let line = format!(
            "{indent}{lead} ({}{}{}){body}",
            pad(left),
            old.literal,
            pad(right)
        );

        let marked = set_status(&classifier, &line, &new).unwrap();
        prop_assert_eq!(
            marked.text,
            format!("{indent}{lead} {}{body}", new.marker())
        );
    }

    #[test]
    fn ineligible_lines_are_rejected(
        line in "[a-zA-Z0-9*+][a-zA-Z0-9 ().,-]{0,30}",
        kind in kind_strategy(),
    ) {
        let (_, classifier) = markers();
        prop_assert_eq!(classifier.classify(&line), None);
        prop_assert_eq!(
            set_status(&classifier, &line, &kind),
            Err(MarkError::NotEligible)
        );
    }

    #[test]
    fn longest_heading_token_wins(
        depth in 1usize..=9,
        body in " [a-zA-Z0-9 ]{0,16}",
    ) {
        let (_, classifier) = markers();
        let line = format!("{}{body}", "#".repeat(depth));

        let lead = classifier.lead(&line).unwrap();
        prop_assert_eq!(lead.start, 0);
        prop_assert_eq!(lead.len(), depth.min(6));
    }
}
