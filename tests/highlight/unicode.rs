//! Multi-byte and case-folding span tests.
//!
//! Span boundaries are byte offsets into the original text, computed from
//! character positions in the folded copy. Accented Latin, ß, and emoji all
//! keep a 1:1 character mapping under the fold, so offsets must line up.

use syllabus::{highlight, Span};

fn concat(spans: &[Span<'_>]) -> String {
    spans.iter().map(|s| s.text).collect()
}

#[test]
fn accented_text_highlights_cleanly() {
    let spans = highlight("Guía de Código", "código");

    assert_eq!(
        spans,
        [
            Span { text: "Guía de ", matched: false },
            Span { text: "Código", matched: true },
        ]
    );
    assert_eq!(concat(&spans), "Guía de Código");
}

#[test]
fn folding_covers_non_ascii_uppercase() {
    let spans = highlight("CÓDIGO LIMPIO", "código");

    assert_eq!(
        spans,
        [
            Span { text: "CÓDIGO", matched: true },
            Span { text: " LIMPIO", matched: false },
        ]
    );
}

#[test]
fn plain_ascii_queries_do_not_reach_accented_text() {
    // No diacritic stripping here, same as the matcher.
    let spans = highlight("Código", "codigo");
    assert_eq!(spans, [Span { text: "Código", matched: false }]);
}

#[test]
fn sharp_s_folds_to_itself() {
    let spans = highlight("Straße", "straße");
    assert_eq!(spans, [Span { text: "Straße", matched: true }]);

    // "SS" is not folded into "ß"; the phrase scan stays 1:1.
    let spans = highlight("Straße", "STRASSE");
    assert_eq!(spans, [Span { text: "Straße", matched: false }]);
}

#[test]
fn emoji_neighbors_keep_their_bytes() {
    let spans = highlight("🦀 Rust Basics", "rust");

    assert_eq!(
        spans,
        [
            Span { text: "🦀 ", matched: false },
            Span { text: "Rust", matched: true },
            Span { text: " Basics", matched: false },
        ]
    );
    assert_eq!(concat(&spans), "🦀 Rust Basics");
}

#[test]
fn multibyte_adjacent_matches_split_correctly() {
    let spans = highlight("ééé", "éé");

    assert_eq!(
        spans,
        [
            Span { text: "éé", matched: true },
            Span { text: "é", matched: false },
        ]
    );
}
