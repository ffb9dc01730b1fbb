//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::collections::HashSet;

use syllabus::ScoredCourse;

// Re-export canonical test builders from syllabus::testing
pub use syllabus::testing::{
    course, course_with_modules, module, module_with_code, sample_catalog, synthetic_catalog,
};

/// Titles of ranked hits, in order. Keeps list assertions short.
pub fn titles<'a>(hits: &[ScoredCourse<'a>]) -> Vec<&'a str> {
    hits.iter().map(|h| h.course.title.as_str()).collect()
}

/// Ids of ranked hits, in order.
pub fn ids<'a>(hits: &[ScoredCourse<'a>]) -> Vec<&'a str> {
    hits.iter().map(|h| h.course.id.as_str()).collect()
}

/// Assert the invariants that hold for every non-blank query:
/// unique course ids, descending scores, no zero-score survivors.
pub fn assert_ranked_well_formed(hits: &[ScoredCourse<'_>], query: &str) {
    let id_list: Vec<_> = hits.iter().map(|h| h.course.id.as_str()).collect();
    let unique: HashSet<_> = id_list.iter().collect();
    assert_eq!(
        id_list.len(),
        unique.len(),
        "duplicate courses in results for query '{}'",
        query
    );

    for pair in hits.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "score ordering violated for query '{}': {} before {}",
            query,
            pair[0].score,
            pair[1].score
        );
    }

    for hit in hits {
        assert!(
            hit.score >= 1,
            "zero-score survivor '{}' for query '{}'",
            hit.course.id,
            query
        );
    }
}
