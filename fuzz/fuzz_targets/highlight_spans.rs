// Copyright 2025-present DevLearning Hub
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for span highlighting.
//!
//! The spans are rendered straight into the catalog page, so the one invariant
//! that can never bend is lossless reassembly. If concatenating the spans does
//! not rebuild the text, the page renders garbage.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use syllabus::highlight;

/// Fuzz input for highlighting
#[derive(Debug, Arbitrary)]
struct HighlightInput {
    /// Text being rendered (titles, descriptions, code)
    text_bytes: Vec<u8>,
    /// User query, as typed
    query_bytes: Vec<u8>,
}

fuzz_target!(|input: HighlightInput| {
    let text = String::from_utf8_lossy(&input.text_bytes).into_owned();
    let query = String::from_utf8_lossy(&input.query_bytes).into_owned();

    // Cap lengths to avoid timeouts (char-wise, so no boundary panics)
    let text: String = text.chars().take(300).collect();
    let query: String = query.chars().take(60).collect();

    // INVARIANT 1: highlighting never panics
    let spans = highlight(&text, &query);

    // INVARIANT 2: concatenating the spans reproduces the text exactly
    let rebuilt: String = spans.iter().map(|s| s.text).collect();
    assert_eq!(rebuilt, text, "spans do not reassemble the input");

    let trimmed = query.trim();
    if trimmed.is_empty() {
        // INVARIANT 3: blank queries yield one unmatched span, even for ""
        assert_eq!(spans.len(), 1, "blank query produced {} spans", spans.len());
        assert!(!spans[0].matched, "blank query produced a matched span");
        assert_eq!(spans[0].text, text, "blank query span is not the whole text");
    } else {
        // INVARIANT 4: real queries never emit empty spans
        for span in &spans {
            assert!(!span.text.is_empty(), "empty span in scan output");
        }

        // INVARIANT 5: unmatched spans never sit next to each other
        for pair in spans.windows(2) {
            assert!(
                pair[0].matched || pair[1].matched,
                "adjacent unmatched spans around {:?}",
                pair[1].text
            );
        }

        // INVARIANT 6: every matched span is one occurrence of the whole
        // phrase, so its char count equals the trimmed query's
        let want = trimmed.chars().count();
        for span in spans.iter().filter(|s| s.matched) {
            assert_eq!(
                span.text.chars().count(),
                want,
                "matched span {:?} is not the query phrase",
                span.text
            );
        }
    }

    // INVARIANT 7: highlighting is deterministic
    let again = highlight(&text, &query);
    assert_eq!(spans, again, "same input highlighted differently");
});
