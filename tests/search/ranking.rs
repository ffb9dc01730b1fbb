//! Weight composition and ordering tests.
//!
//! Fixtures are built so that exactly the intended fields match; rare letters
//! (q, z) isolate a single field where the score breakdown matters.

use super::common::{
    assert_ranked_well_formed, course, course_with_modules, module, module_with_code, titles,
};
use syllabus::search::rank_scored;

#[test]
fn title_and_category_add_for_a_single_word() {
    let courses = vec![
        course("go-basics", "Go Basics", "GO"),
        course("py-basics", "Python Basics", "PY"),
    ];

    let hits = rank_scored(&courses, "go");

    assert_eq!(titles(&hits), ["Go Basics"]);
    // title exact (100) + category exact (50)
    assert_eq!(hits[0].score, 150);
}

#[test]
fn each_query_word_scores_its_own_best_fields() {
    let courses = vec![course_with_modules(
        "go-conc",
        "Go Concurrency",
        "CS",
        vec![module("channels", "Channels", "Buffered and unbuffered sends.")],
    )];

    let hits = rank_scored(&courses, "go channels");

    // "go": title exact (100). "channels": module title exact (30).
    // The CS category matches neither word.
    assert_eq!(hits[0].score, 130);
}

#[test]
fn every_field_contributes_when_one_word_hits_them_all() {
    let courses = vec![course_with_modules(
        "go-basics",
        "Go Basics",
        "GO",
        vec![module_with_code(
            "setup",
            "Golang Setup",
            "Install the Go toolchain.",
            "sh",
            "go version",
        )],
    )];

    let hits = rank_scored(&courses, "go");

    // 100 title + 50 category + 30 module title + 10 module description + 5 code
    assert_eq!(hits[0].score, 195);
}

#[test]
fn module_title_hits_accumulate_across_modules() {
    let courses = vec![course_with_modules(
        "web",
        "Web Fundamentals",
        "JS",
        vec![
            module("req", "Quartz Requests", "Sending them."),
            module("res", "Quartz Responses", "Reading them."),
        ],
    )];

    let hits = rank_scored(&courses, "quartz");

    // two exact module-title hits, 30 each
    assert_eq!(hits[0].score, 60);
}

#[test]
fn title_hits_outrank_module_hits() {
    let courses = vec![
        course_with_modules(
            "indirect",
            "Databases",
            "SQL",
            vec![module("idx", "Quartz Indexing", "Fast lookups.")],
        ),
        course("direct", "Quartz Basics", "CS"),
    ];

    let hits = rank_scored(&courses, "quartz");

    // title exact (100) beats module title exact (30) regardless of input order
    assert_eq!(titles(&hits), ["Quartz Basics", "Databases"]);
    assert_eq!(hits[0].score, 100);
    assert_eq!(hits[1].score, 30);
}

#[test]
fn description_hits_outrank_code_hits() {
    let courses = vec![
        course_with_modules(
            "code-only",
            "Structs",
            "CS",
            vec![module_with_code("layout", "Layout", "Memory layout.", "c", "quokkas = 1;")],
        ),
        course_with_modules(
            "desc-only",
            "Pointers",
            "CS",
            vec![module("basics", "Basics", "All about quokkas.")],
        ),
    ];

    let hits = rank_scored(&courses, "quokkas");

    // module description exact (10) beats code exact (5)
    assert_eq!(titles(&hits), ["Pointers", "Structs"]);
    assert_eq!(hits[0].score, 10);
    assert_eq!(hits[1].score, 5);
}

#[test]
fn fuzzy_title_hit_outranks_exact_code_hit() {
    let courses = vec![
        course_with_modules(
            "snippets",
            "Python Data",
            "PY",
            vec![module_with_code("hash", "Hashing", "Hash functions.", "py", "gcy = 5")],
        ),
        course_with_modules(
            "conc",
            "Go Concurrency",
            "CS",
            vec![module("mutexes", "Mutexes", "Locks.")],
        ),
    ];

    let hits = rank_scored(&courses, "gcy");

    // fuzzy title (20) beats exact code (5)
    assert_eq!(titles(&hits), ["Go Concurrency", "Python Data"]);
    assert_eq!(hits[0].score, 20);
    assert_eq!(hits[1].score, 5);
}

#[test]
fn category_never_scores_fuzzy() {
    // "gq" is a subsequence of the category but a substring of nothing.
    let courses = vec![course("g", "Title", "GREQ")];

    let hits = rank_scored(&courses, "gq");

    assert!(hits.is_empty(), "category subsequence must not score");
}

#[test]
fn repeated_query_words_count_twice() {
    let courses = vec![course("go-basics", "Go Basics", "GO")];

    let single = rank_scored(&courses, "go");
    let doubled = rank_scored(&courses, "go go");

    assert_eq!(doubled[0].score, 2 * single[0].score);
}

#[test]
fn broad_queries_stay_well_formed() {
    let courses = super::common::synthetic_catalog(40);

    for query in ["go", "intro", "advanced patterns", "data"] {
        let hits = rank_scored(&courses, query);
        assert_ranked_well_formed(&hits, query);
    }
}
