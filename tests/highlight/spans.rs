//! Span decomposition tests.
//!
//! The one invariant everything else leans on: concatenating the spans gives
//! back the input text, byte for byte. The page renders spans directly, so a
//! single dropped character would corrupt every title it highlights.

use syllabus::{highlight, Span};

fn concat(spans: &[Span<'_>]) -> String {
    spans.iter().map(|s| s.text).collect()
}

#[test]
fn match_in_the_middle_splits_in_three() {
    let spans = highlight("Advanced Go Patterns", "go");

    assert_eq!(
        spans,
        [
            Span { text: "Advanced ", matched: false },
            Span { text: "Go", matched: true },
            Span { text: " Patterns", matched: false },
        ]
    );
}

#[test]
fn concatenation_reproduces_the_text() {
    let cases = [
        ("Go Basics", "go"),
        ("Go Basics", "basics"),
        ("Go Basics", "go basics"),
        ("Go Basics", "python"),
        ("Go Basics", ""),
        ("", "go"),
        ("", ""),
        ("gogogo", "gog"),
        ("a b a b a", "a"),
    ];

    for (text, query) in cases {
        let spans = highlight(text, query);
        assert_eq!(concat(&spans), text, "text {:?}, query {:?}", text, query);
    }
}

#[test]
fn blank_query_yields_one_unmatched_span() {
    for query in ["", "   ", "\t\n"] {
        let spans = highlight("Go Basics", query);
        assert_eq!(spans, [Span { text: "Go Basics", matched: false }]);
    }

    // Even for empty text: one span, not zero.
    assert_eq!(highlight("", ""), [Span { text: "", matched: false }]);
}

#[test]
fn source_casing_is_preserved_in_matched_spans() {
    let spans = highlight("GO and go and Go", "go");

    let matched: Vec<_> = spans.iter().filter(|s| s.matched).map(|s| s.text).collect();
    assert_eq!(matched, ["GO", "go", "Go"]);
    assert_eq!(concat(&spans), "GO and go and Go");
}

#[test]
fn regex_metacharacters_are_literal() {
    let spans = highlight("price is $5 (sale)", "$5 (sale)");

    assert_eq!(
        spans,
        [
            Span { text: "price is ", matched: false },
            Span { text: "$5 (sale)", matched: true },
        ]
    );

    // "a.b" must not match "axb" the way a regex dot would
    let spans = highlight("axb", "a.b");
    assert_eq!(spans, [Span { text: "axb", matched: false }]);
}

#[test]
fn matches_never_overlap() {
    // Greedy left-to-right: "aaa" holds one "aa" match, not two.
    let spans = highlight("aaa", "aa");

    assert_eq!(
        spans,
        [
            Span { text: "aa", matched: true },
            Span { text: "a", matched: false },
        ]
    );
}

#[test]
fn adjacent_matches_stay_separate_spans() {
    let spans = highlight("gogo", "go");

    assert_eq!(
        spans,
        [
            Span { text: "go", matched: true },
            Span { text: "go", matched: true },
        ]
    );
}

#[test]
fn the_query_is_one_phrase_not_words() {
    // Both words are present, but not adjacent: no match.
    let spans = highlight("go deep channels", "go channels");
    assert_eq!(spans, [Span { text: "go deep channels", matched: false }]);

    // Adjacent as a phrase: one match.
    let spans = highlight("intro to go channels", "go channels");
    assert!(spans.iter().any(|s| s.matched && s.text == "go channels"));
}

#[test]
fn query_whitespace_is_trimmed_before_scanning() {
    let spans = highlight("Go Basics", "  go  ");

    assert_eq!(
        spans,
        [
            Span { text: "Go", matched: true },
            Span { text: " Basics", matched: false },
        ]
    );
}

#[test]
fn no_span_is_ever_empty_when_scanning() {
    let cases = [
        ("gogo", "go"),
        ("go", "go"),
        ("xgox", "go"),
        ("", "go"),
        ("ababab", "ab"),
    ];

    for (text, query) in cases {
        for span in highlight(text, query) {
            assert!(!span.text.is_empty(), "empty span for text {:?}, query {:?}", text, query);
        }
    }
}
