//! Exact and fuzzy word matching over case-folded text.
//!
//! This is the primitive everything else builds on. The ranker asks it how a
//! query word relates to each catalog field, and the highlighter reuses the
//! same fold so that what gets emphasized agrees with what got scored.
//!
//! Matching is tiered the same way search results are: a contiguous substring
//! beats a scattered one. `Exact` means the word appears verbatim (ignoring
//! case) somewhere in the text. `Fuzzy` means the word's characters all appear
//! in order but with gaps - "chnl" inside "channels". Anything else is `None`.
//!
//! # Case folding
//!
//! Folding is simple (1:1): each character maps through `char::to_lowercase`,
//! and characters whose lowercase form expands to multiple characters ('İ')
//! are kept as typed. That keeps character counts stable, which the
//! highlighter depends on to map match positions back into the original text.
//! There is deliberately no accent stripping and no whitespace collapsing:
//! "café" and "cafe" are different texts here.

use serde::{Deserialize, Serialize};

/// How a query word relates to a text.
///
/// The ordering of the variants mirrors their strength: `Exact` implies the
/// word is also a subsequence, so the matcher never reports `Fuzzy` for a
/// contiguous hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// Contiguous case-insensitive substring.
    Exact,
    /// All characters present in order, but not contiguous.
    Fuzzy,
    /// Neither.
    None,
}

impl MatchKind {
    /// True for `Exact` and `Fuzzy`.
    #[inline]
    pub fn is_hit(self) -> bool {
        !matches!(self, MatchKind::None)
    }
}

/// Fold one character for comparison.
///
/// Multi-character lowercase expansions are left alone so folding never
/// changes the number of characters in a string.
#[inline]
pub(crate) fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Fold a whole string into comparison characters.
pub(crate) fn fold(text: &str) -> Vec<char> {
    text.chars().map(fold_char).collect()
}

/// Windowed scan for `needle` as a contiguous run inside `haystack`.
///
/// An empty needle is found at position 0. O(n*m) worst case, which is fine
/// for catalog-sized fields; no allocation beyond the pre-folded slices.
pub(crate) fn find_folded(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    if needle.len() > haystack.len() {
        return None;
    }
    'outer: for start in 0..=(haystack.len() - needle.len()) {
        for (offset, nc) in needle.iter().enumerate() {
            if haystack[start + offset] != *nc {
                continue 'outer;
            }
        }
        return Some(start);
    }
    None
}

/// Two-pointer subsequence scan: do `needle`'s characters appear in order
/// inside `haystack`, gaps allowed?
fn is_subsequence(needle: &[char], haystack: &[char]) -> bool {
    let mut remaining = needle.iter();
    let mut expect = remaining.next();
    for hc in haystack {
        match expect {
            Some(nc) if nc == hc => expect = remaining.next(),
            Some(_) => {}
            None => break,
        }
    }
    expect.is_none()
}

/// Classify pre-folded text against a pre-folded word.
///
/// The ranker folds each field once and reuses it across every query word,
/// so the fold cost is paid per field, not per (field, word) pair.
pub(crate) fn matches_folded(haystack: &[char], needle: &[char]) -> MatchKind {
    if find_folded(haystack, needle).is_some() {
        MatchKind::Exact
    } else if is_subsequence(needle, haystack) {
        MatchKind::Fuzzy
    } else {
        MatchKind::None
    }
}

/// How does `word` relate to `text`?
///
/// Total over any pair of strings. An empty `word` is defined to match as
/// `Exact` (the ranker's word-splitting never produces one, but the contract
/// holds anyway); empty `text` matches nothing else.
pub fn matches(text: &str, word: &str) -> MatchKind {
    matches_folded(&fold(text), &fold(word))
}
