// Copyright 2025-present DevLearning Hub
// SPDX-License-Identifier: Apache-2.0

//! Course catalog types and loading.
//!
//! The catalog is a flat list of [`Course`] records, each with an ordered list
//! of [`Module`]s. A default catalog ships embedded in the binary; an
//! alternate one can be loaded from a JSON file with the same shape.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Embedded default catalog, compiled into the binary.
pub const DEFAULT_CATALOG_JSON: &str = include_str!("../data/catalog.json");

/// Rough difficulty tier for a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        };
        f.write_str(s)
    }
}

/// A code sample attached to a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSnippet {
    /// Language tag as it would appear on a fenced block ("go", "py", "sql").
    pub lang: String,
    /// The sample itself, verbatim. Searched at the lowest weight tier.
    pub body: String,
}

/// One unit of a course: a titled lesson, optionally carrying a code sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    /// Unique within the parent course, not globally.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Not every module has code; theory modules leave this out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeSnippet>,
}

/// A course in the catalog.
///
/// `category` is the short tag shown on the course card ("GO", "PY", "SQL"),
/// and it is what category search matches against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Stable slug, unique within a catalog.
    pub id: String,
    pub title: String,
    pub category: String,
    pub level: Level,
    pub description: String,
    pub modules: Vec<Module>,
}

impl Course {
    /// Total number of modules that carry a code sample.
    pub fn snippet_count(&self) -> usize {
        self.modules.iter().filter(|m| m.code.is_some()).count()
    }
}

/// Parse the embedded default catalog.
pub fn builtin() -> io::Result<Vec<Course>> {
    parse(DEFAULT_CATALOG_JSON)
}

/// Load a catalog from a JSON file.
pub fn load(path: &Path) -> io::Result<Vec<Course>> {
    let data = fs::read_to_string(path)?;
    parse(&data)
}

fn parse(data: &str) -> io::Result<Vec<Course>> {
    let courses: Vec<Course> =
        serde_json::from_str(data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    validate(&courses)?;
    Ok(courses)
}

/// Reject catalogs the rest of the crate cannot key on: blank course ids,
/// duplicate course ids, duplicate module ids within a course.
fn validate(courses: &[Course]) -> io::Result<()> {
    let mut course_ids = HashSet::new();
    for course in courses {
        if course.id.trim().is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("course {:?} has a blank id", course.title),
            ));
        }
        if !course_ids.insert(course.id.as_str()) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("duplicate course id {:?}", course.id),
            ));
        }
        let mut module_ids = HashSet::new();
        for module in &course.modules {
            if !module_ids.insert(module.id.as_str()) {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("duplicate module id {:?} in course {:?}", module.id, course.id),
                ));
            }
        }
    }
    Ok(())
}

/// Look a course up by its id.
pub fn find_by_id<'a>(courses: &'a [Course], id: &str) -> Option<&'a Course> {
    courses.iter().find(|c| c.id == id)
}
