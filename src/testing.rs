//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::catalog::{CodeSnippet, Course, Level, Module};

/// Create a course with no modules.
///
/// This is the canonical fixture used across all tests.
pub fn course(id: &str, title: &str, category: &str) -> Course {
    Course {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        level: Level::Beginner,
        description: format!("A short course about {}.", title),
        modules: vec![],
    }
}

/// Create a course with the given modules.
pub fn course_with_modules(id: &str, title: &str, category: &str, modules: Vec<Module>) -> Course {
    Course {
        modules,
        ..course(id, title, category)
    }
}

/// Create a module without code.
pub fn module(id: &str, title: &str, description: &str) -> Module {
    Module {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        code: None,
    }
}

/// Create a module carrying a code sample.
pub fn module_with_code(id: &str, title: &str, description: &str, lang: &str, body: &str) -> Module {
    Module {
        code: Some(CodeSnippet {
            lang: lang.to_string(),
            body: body.to_string(),
        }),
        ..module(id, title, description)
    }
}

/// A small fixed catalog exercising every scoring field: titles, category
/// tags, module titles, descriptions, and code bodies.
pub fn sample_catalog() -> Vec<Course> {
    vec![
        course_with_modules(
            "go-basics",
            "Go Basics",
            "GO",
            vec![
                module("hello", "Hello World", "Your first Go program."),
                module_with_code(
                    "funcs",
                    "Functions",
                    "Defining and calling functions.",
                    "go",
                    "func add(a, b int) int { return a + b }",
                ),
            ],
        ),
        course_with_modules(
            "go-concurrency",
            "Go Concurrency",
            "GO",
            vec![
                module_with_code(
                    "channels",
                    "Channels",
                    "Typed conduits between goroutines.",
                    "go",
                    "ch := make(chan int)\ngo func() { ch <- 42 }()",
                ),
                module("select", "Select", "Waiting on several channels at once."),
            ],
        ),
        course_with_modules(
            "python-basics",
            "Python Basics",
            "PY",
            vec![module_with_code(
                "lists",
                "Lists",
                "Growable sequences.",
                "py",
                "squares = [n * n for n in range(10)]",
            )],
        ),
        course_with_modules(
            "sql-fundamentals",
            "SQL Fundamentals",
            "SQL",
            vec![module_with_code(
                "select-basics",
                "SELECT",
                "Reading rows out of a table.",
                "sql",
                "SELECT name, price FROM products WHERE price > 10;",
            )],
        ),
    ]
}

/// Generate a deterministic catalog of `count` courses for benches and
/// property tests. Titles, categories, and module contents cycle through a
/// fixed vocabulary, so hit rates stay realistic as the catalog grows.
pub fn synthetic_catalog(count: usize) -> Vec<Course> {
    const TOPICS: &[&str] = &[
        "Go", "Python", "Rust", "JavaScript", "TypeScript", "SQL", "Haskell", "Kotlin",
    ];
    const TAGS: &[&str] = &["GO", "PY", "RS", "JS", "TS", "SQL", "HS", "KT"];
    const ASPECTS: &[&str] = &[
        "Basics",
        "Concurrency",
        "Testing",
        "Web Services",
        "Data Structures",
        "Performance",
    ];

    (0..count)
        .map(|i| {
            let topic = TOPICS[i % TOPICS.len()];
            let tag = TAGS[i % TAGS.len()];
            let aspect = ASPECTS[i / TOPICS.len() % ASPECTS.len()];
            course_with_modules(
                &format!("course-{i}"),
                &format!("{topic} {aspect}"),
                tag,
                vec![
                    module(
                        &format!("m{i}-intro"),
                        &format!("Introduction to {aspect}"),
                        &format!("What {aspect} means in {topic}."),
                    ),
                    module_with_code(
                        &format!("m{i}-practice"),
                        &format!("{aspect} in Practice"),
                        &format!("Worked examples of {aspect}."),
                        &tag.to_lowercase(),
                        &format!("// {topic} example {i}\nlet value = {i};"),
                    ),
                ],
            )
        })
        .collect()
}
