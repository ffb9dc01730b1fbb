//! Query-to-catalog ranking.
//!
//! The ranker splits the query into words, asks the [`matcher`] how each word
//! relates to each course field, sums the [`scoring`] weights, drops courses
//! that score zero, and sorts the rest by descending score. The sort is
//! stable: equal scores keep the order the courses had in the catalog, which
//! is a deliberate tie-break policy, not an accident.
//!
//! A blank query is browsing, not searching: the whole catalog comes back in
//! catalog order, unscored and unfiltered.
//!
//! # Unicode Support
//!
//! Fields are folded to comparison characters once per [`rank`] call and
//! reused across every query word, so the fold cost scales with catalog size,
//! not with catalog size times word count. Matching is code-point matching;
//! see [`matcher`] for what folding does and does not normalize.
//!
//! [`matcher`]: crate::matcher
//! [`scoring`]: crate::scoring

use serde::Serialize;

use crate::catalog::Course;
use crate::matcher::{self, matches_folded};
use crate::scoring;

/// A course paired with the relevance score that ordered it.
///
/// For a non-blank query every returned score is at least 1; courses that
/// score 0 are dropped before sorting. For a blank query the score is 0 by
/// convention, meaning "never scored".
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCourse<'a> {
    #[serde(flatten)]
    pub course: &'a Course,
    pub score: u32,
}

/// A course's text fields, pre-folded for matching.
struct FoldedCourse<'a> {
    course: &'a Course,
    title: Vec<char>,
    category: Vec<char>,
    modules: Vec<FoldedModule>,
}

struct FoldedModule {
    title: Vec<char>,
    description: Vec<char>,
    code: Option<Vec<char>>,
}

impl<'a> FoldedCourse<'a> {
    fn new(course: &'a Course) -> Self {
        FoldedCourse {
            title: matcher::fold(&course.title),
            category: matcher::fold(&course.category),
            modules: course
                .modules
                .iter()
                .map(|m| FoldedModule {
                    title: matcher::fold(&m.title),
                    description: matcher::fold(&m.description),
                    code: m.code.as_ref().map(|c| matcher::fold(&c.body)),
                })
                .collect(),
            course,
        }
    }

    /// Total weight of one query word against every field of this course.
    fn word_score(&self, word: &[char]) -> u32 {
        let mut score = scoring::title_score(matches_folded(&self.title, word))
            + scoring::category_score(matches_folded(&self.category, word));
        for module in &self.modules {
            score += scoring::module_title_score(matches_folded(&module.title, word));
            score += scoring::module_description_score(matches_folded(&module.description, word));
            if let Some(code) = &module.code {
                score += scoring::code_score(matches_folded(code, word));
            }
        }
        score
    }
}

/// Split a query into folded, non-empty words.
///
/// Runs of whitespace collapse; leading and trailing whitespace disappears.
/// An all-whitespace query yields no words, which callers treat as blank.
pub(crate) fn query_words(query: &str) -> Vec<Vec<char>> {
    query.split_whitespace().map(matcher::fold).collect()
}

/// Rank the catalog against a query, keeping scores.
///
/// Scores sum per word and per module, so a course with many matching
/// modules outranks one with few. Blank queries pass every course through in
/// order with score 0.
pub fn rank_scored<'a>(courses: &'a [Course], query: &str) -> Vec<ScoredCourse<'a>> {
    let words = query_words(query);
    if words.is_empty() {
        return courses
            .iter()
            .map(|course| ScoredCourse { course, score: 0 })
            .collect();
    }

    let mut scored: Vec<ScoredCourse<'a>> = courses
        .iter()
        .map(FoldedCourse::new)
        .filter_map(|folded| {
            let score: u32 = words.iter().map(|word| folded.word_score(word)).sum();
            (score > 0).then_some(ScoredCourse {
                course: folded.course,
                score,
            })
        })
        .collect();

    // Stable sort: ties keep catalog order.
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// Rank the catalog against a query, returning only the surviving courses.
///
/// Same ordering contract as [`rank_scored`]; use that variant when the
/// caller wants to display or assert on the scores themselves.
pub fn rank<'a>(courses: &'a [Course], query: &str) -> Vec<&'a Course> {
    rank_scored(courses, query)
        .into_iter()
        .map(|scored| scored.course)
        .collect()
}
