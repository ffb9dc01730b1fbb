// Copyright 2025-present DevLearning Hub
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for catalog ranking.
//!
//! Throws arbitrary byte sequences at the ranker to verify it never panics and
//! never violates the ordering contract. Course catalogs are small; queries
//! are hostile.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;
use syllabus::testing::synthetic_catalog;
use syllabus::{rank, rank_scored, Course};

fuzz_target!(|query: &[u8]| {
    // Build the catalog once per process
    static CATALOG: std::sync::OnceLock<Vec<Course>> = std::sync::OnceLock::new();
    let catalog = CATALOG.get_or_init(|| synthetic_catalog(32));

    // Convert to string, handling invalid UTF-8
    let query = match std::str::from_utf8(query) {
        Ok(s) => s.to_string(),
        Err(_) => String::from_utf8_lossy(query).into_owned(),
    };

    // Cap query length to avoid timeouts (char-wise, so no boundary panics)
    let query: String = query.chars().take(120).collect();

    // INVARIANT 1: ranking never panics, whatever the query
    let hits = rank_scored(catalog, &query);

    // INVARIANT 2: same query twice produces identical results
    let again = rank_scored(catalog, &query);
    assert_eq!(hits.len(), again.len(), "result count changed between runs");
    for (a, b) in hits.iter().zip(again.iter()) {
        assert_eq!(a.course.id, b.course.id, "result order changed between runs");
        assert_eq!(a.score, b.score, "score changed between runs");
    }

    // INVARIANT 3: scores are non-increasing
    for pair in hits.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "scores not sorted: {} before {}",
            pair[0].score,
            pair[1].score
        );
    }

    // INVARIANT 4: no course appears twice
    let mut seen = HashSet::new();
    for hit in &hits {
        assert!(
            seen.insert(hit.course.id.as_str()),
            "duplicate course id {} in results",
            hit.course.id
        );
    }

    if query.trim().is_empty() {
        // INVARIANT 5a: blank queries pass the whole catalog through in order
        assert_eq!(hits.len(), catalog.len(), "blank query dropped courses");
        for (hit, course) in hits.iter().zip(catalog.iter()) {
            assert_eq!(hit.course.id, course.id, "blank query reordered courses");
            assert_eq!(hit.score, 0, "blank query produced a nonzero score");
        }
    } else {
        // INVARIANT 5b: every survivor of a real query scored at least once
        for hit in &hits {
            assert!(hit.score >= 1, "course {} kept with score 0", hit.course.id);
        }

        // INVARIANT 6: scores stay under the per-word weight ceiling
        // (synthetic courses have two modules each)
        let words = query.split_whitespace().count() as u32;
        let ceiling = words * (100 + 50 + 2 * (30 + 10 + 5));
        for hit in &hits {
            assert!(
                hit.score <= ceiling,
                "course {} scored {} above ceiling {}",
                hit.course.id,
                hit.score,
                ceiling
            );
        }
    }

    // INVARIANT 7: rank() is rank_scored() minus the scores
    let plain = rank(catalog, &query);
    assert_eq!(plain.len(), hits.len(), "rank and rank_scored disagree on count");
    for (course, hit) in plain.iter().zip(hits.iter()) {
        assert_eq!(course.id, hit.course.id, "rank and rank_scored disagree on order");
    }
});
