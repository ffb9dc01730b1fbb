// Copyright 2025-present DevLearning Hub
// SPDX-License-Identifier: Apache-2.0

//! Splitting text into matched and unmatched spans for display.
//!
//! Where the ranker word-splits the query, the highlighter treats it as one
//! literal phrase. The two grew up separately in the page this library came
//! from and the asymmetry is part of the contract now: searching "go web"
//! can rank a course that never contains the phrase "go web", and the
//! highlighter will then mark nothing in it. Unifying the two would change
//! observable behavior, so it stays.
//!
//! The query is literal text, never a pattern. "a.b" highlights "a.b" and
//! leaves "axb" alone. Fuzzy matches are never highlighted.

use serde::Serialize;

use crate::matcher;

/// One run of text, flagged if it is part of a query occurrence.
///
/// Spans borrow from the input text: concatenating `text` over a highlight
/// result in order reproduces the input exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Span<'a> {
    pub text: &'a str,
    pub matched: bool,
}

/// Split `text` into alternating unmatched/matched spans around every
/// non-overlapping, case-insensitive occurrence of `query` as a whole phrase.
///
/// A blank query (empty after trimming) yields exactly one unmatched span
/// holding the whole text, even when the text itself is empty. With a
/// non-blank query, empty spans are never emitted: back-to-back occurrences
/// produce adjacent matched spans with no empty filler between them, and an
/// empty text yields no spans at all.
pub fn highlight<'a>(text: &'a str, query: &str) -> Vec<Span<'a>> {
    let query = query.trim();
    if query.is_empty() {
        return vec![Span {
            text,
            matched: false,
        }];
    }

    let folded_text = matcher::fold(text);
    let folded_query = matcher::fold(query);

    // Byte offset of each character, plus the end sentinel, so char-indexed
    // match positions can slice the original text. Folding is 1:1, so folded
    // indices and original char indices agree.
    let byte_at: Vec<usize> = text
        .char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(text.len()))
        .collect();

    let mut spans = Vec::new();
    let mut cursor = 0usize;
    while cursor < folded_text.len() {
        match matcher::find_folded(&folded_text[cursor..], &folded_query) {
            Some(rel) => {
                let start = cursor + rel;
                let end = start + folded_query.len();
                if start > cursor {
                    spans.push(Span {
                        text: &text[byte_at[cursor]..byte_at[start]],
                        matched: false,
                    });
                }
                spans.push(Span {
                    text: &text[byte_at[start]..byte_at[end]],
                    matched: true,
                });
                cursor = end;
            }
            None => break,
        }
    }
    if cursor < folded_text.len() {
        spans.push(Span {
            text: &text[byte_at[cursor]..],
            matched: false,
        });
    }
    spans
}
