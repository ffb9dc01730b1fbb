//! Match classification through the public API.
//!
//! The unit tests next to the matcher cover the scan mechanics; these pin the
//! exported contract: kinds, case folding, and the JSON names the page sees.

use syllabus::{matches, MatchKind};

#[test]
fn case_differs_on_both_sides() {
    assert_eq!(matches("Go Basics", "BASIC"), MatchKind::Exact);
    assert_eq!(matches("PYTHON", "python"), MatchKind::Exact);
}

#[test]
fn exact_wins_when_fuzzy_also_applies() {
    // "cab" is both a substring and a subsequence of "abcabc"
    assert_eq!(matches("abcabc", "cab"), MatchKind::Exact);
}

#[test]
fn scattered_letters_are_fuzzy() {
    assert_eq!(matches("Go Concurrency", "gcy"), MatchKind::Fuzzy);
    assert_eq!(matches("hello world", "lll"), MatchKind::Fuzzy);
}

#[test]
fn out_of_order_letters_miss() {
    assert_eq!(matches("Go Concurrency", "ycg"), MatchKind::None);
}

#[test]
fn accented_text_requires_an_accented_query() {
    // No diacritic stripping: plain "codigo" cannot reach "Código".
    assert_eq!(matches("Código", "código"), MatchKind::Exact);
    assert_eq!(matches("Código", "codigo"), MatchKind::None);
}

#[test]
fn empty_word_always_matches_exactly() {
    assert_eq!(matches("anything", ""), MatchKind::Exact);
    assert_eq!(matches("", ""), MatchKind::Exact);
}

#[test]
fn empty_text_never_matches_a_real_word() {
    assert_eq!(matches("", "go"), MatchKind::None);
}

#[test]
fn is_hit_covers_exact_and_fuzzy() {
    assert!(MatchKind::Exact.is_hit());
    assert!(MatchKind::Fuzzy.is_hit());
    assert!(!MatchKind::None.is_hit());
}

#[test]
fn match_kinds_serialize_lowercase() {
    assert_eq!(serde_json::to_string(&MatchKind::Exact).unwrap(), "\"exact\"");
    assert_eq!(serde_json::to_string(&MatchKind::Fuzzy).unwrap(), "\"fuzzy\"");
    assert_eq!(serde_json::to_string(&MatchKind::None).unwrap(), "\"none\"");
}
