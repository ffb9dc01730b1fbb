// Copyright 2025-present DevLearning Hub
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the catalog page.
//!
//! The browser bundle talks to two entry points:
//! - [`CatalogSearch`]: holds a parsed catalog and re-ranks it per keystroke
//! - [`highlight_spans`]: span decomposition for rendering matched text
//!
//! Results cross the boundary as plain JS objects via `serde_wasm_bindgen`,
//! matching the `ScoredCourse` shape the TypeScript side declares.

use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::catalog::{self, Course};
use crate::export;
use crate::highlight::highlight;
use crate::search;

/// WASM-accessible catalog searcher.
///
/// Construct once with the catalog JSON (or [`CatalogSearch::builtin`] for the
/// embedded one), then call [`search`](CatalogSearch::search) on every input
/// change. Ranking a few hundred courses is well under a millisecond, so there
/// is no debounce on this side.
#[wasm_bindgen]
pub struct CatalogSearch {
    courses: Vec<Course>,
}

#[wasm_bindgen]
impl CatalogSearch {
    /// Create a searcher from a catalog passed in as a JS array of courses.
    #[wasm_bindgen(constructor)]
    pub fn new(catalog: JsValue) -> Result<CatalogSearch, JsValue> {
        let courses: Vec<Course> = from_value(catalog).map_err(|e| e.to_string())?;
        Ok(CatalogSearch { courses })
    }

    /// Create a searcher over the catalog embedded at build time.
    #[wasm_bindgen]
    pub fn builtin() -> Result<CatalogSearch, JsValue> {
        let courses = catalog::builtin().map_err(|e| e.to_string())?;
        Ok(CatalogSearch { courses })
    }

    /// Number of courses in the catalog.
    #[wasm_bindgen]
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Rank the catalog against a query.
    ///
    /// Returns a JS array of `{...course, score}` objects, best first. A blank
    /// query returns every course with a score of 0, so the page renders the
    /// full catalog through the same code path.
    #[wasm_bindgen]
    pub fn search(&self, query: &str, limit: Option<usize>) -> Result<JsValue, JsValue> {
        let mut hits = search::rank_scored(&self.courses, query);
        if let Some(limit) = limit {
            hits.truncate(limit);
        }
        to_value(&hits).map_err(|e| e.to_string().into())
    }

    /// Markdown export of one course, for the download button.
    #[wasm_bindgen]
    pub fn export_markdown(&self, id: &str) -> Result<String, JsValue> {
        let course = catalog::find_by_id(&self.courses, id)
            .ok_or_else(|| JsValue::from(format!("unknown course: {}", id)))?;
        Ok(export::course_markdown(course))
    }

    /// One-line share blurb for one course, for the share button.
    #[wasm_bindgen]
    pub fn share_text(&self, id: &str) -> Result<String, JsValue> {
        let course = catalog::find_by_id(&self.courses, id)
            .ok_or_else(|| JsValue::from(format!("unknown course: {}", id)))?;
        Ok(export::share_text(course))
    }
}

/// Split `text` into matched and unmatched spans for `query`.
///
/// Returns a JS array of `{text, matched}` objects whose concatenation is
/// exactly `text`, so the page can wrap matched spans in `<mark>` without
/// re-deriving offsets.
#[wasm_bindgen]
pub fn highlight_spans(text: &str, query: &str) -> Result<JsValue, JsValue> {
    to_value(&highlight(text, query)).map_err(|e| e.to_string().into())
}
