//! Ranking invariants over random catalogs.

use proptest::prelude::*;

use super::common::{course_with_modules, ids, module};
use syllabus::search::rank_scored;
use syllabus::Course;

// ============================================================================
// STRATEGIES
// ============================================================================

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,7}").unwrap()
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 1..4).prop_map(|words| words.join(" "))
}

/// Small random catalogs: a handful of courses with one or two modules each.
fn catalog_strategy() -> impl Strategy<Value = Vec<Course>> {
    prop::collection::vec(
        (word_strategy(), word_strategy(), word_strategy(), word_strategy()),
        0..8,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (title_a, title_b, category, module_title))| {
                course_with_modules(
                    &format!("c{i}"),
                    &format!("{title_a} {title_b}"),
                    &category,
                    vec![module("m", &module_title, "filler text")],
                )
            })
            .collect()
    })
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    /// Scores sum per word, so word order in the query cannot matter; and
    /// since ties break by catalog order, the whole ranking is identical.
    #[test]
    fn query_word_order_is_irrelevant(
        courses in catalog_strategy(),
        mut words in prop::collection::vec(word_strategy(), 1..4),
    ) {
        let forward = words.join(" ");
        words.reverse();
        let backward = words.join(" ");

        let a = rank_scored(&courses, &forward);
        let b = rank_scored(&courses, &backward);

        prop_assert_eq!(ids(&a), ids(&b));
        prop_assert_eq!(
            a.iter().map(|h| h.score).collect::<Vec<_>>(),
            b.iter().map(|h| h.score).collect::<Vec<_>>()
        );
    }

    /// Each course is scored on its own fields alone: growing the catalog
    /// never changes the score an existing course gets.
    #[test]
    fn scores_are_independent_between_courses(
        courses in catalog_strategy(),
        extra in catalog_strategy(),
        query in query_strategy(),
    ) {
        let before: std::collections::HashMap<String, u32> = rank_scored(&courses, &query)
            .iter()
            .map(|h| (h.course.id.clone(), h.score))
            .collect();

        let mut grown: Vec<Course> = courses.clone();
        for (i, mut course) in extra.into_iter().enumerate() {
            course.id = format!("extra-{i}");
            grown.push(course);
        }

        for hit in rank_scored(&grown, &query) {
            if let Some(old) = before.get(&hit.course.id) {
                prop_assert_eq!(*old, hit.score, "course {}", &hit.course.id);
            }
        }
    }

    /// Ranking the survivors again reproduces the same order and scores.
    #[test]
    fn reranking_survivors_changes_nothing(
        courses in catalog_strategy(),
        query in query_strategy(),
    ) {
        let first = rank_scored(&courses, &query);
        let survivors: Vec<Course> = first.iter().map(|h| h.course.clone()).collect();
        let second = rank_scored(&survivors, &query);

        prop_assert_eq!(ids(&first), ids(&second));
        prop_assert_eq!(
            first.iter().map(|h| h.score).collect::<Vec<_>>(),
            second.iter().map(|h| h.score).collect::<Vec<_>>()
        );
    }

    /// A score can never exceed what every field matching exactly would pay.
    #[test]
    fn scores_respect_the_weight_ceiling(
        courses in catalog_strategy(),
        query in query_strategy(),
    ) {
        let words = query.split_whitespace().count() as u32;

        for hit in rank_scored(&courses, &query) {
            let modules = hit.course.modules.len() as u32;
            let ceiling = words * (100 + 50 + modules * (30 + 10 + 5));
            prop_assert!(
                hit.score <= ceiling,
                "score {} above ceiling {} for {}",
                hit.score,
                ceiling,
                &hit.course.id
            );
        }
    }
}
