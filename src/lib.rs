//! Course catalog search and highlighting for DevLearning Hub.
//!
//! This crate is the text engine behind an educational course catalog: a
//! word-splitting, field-weighted ranker with exact and fuzzy (ordered
//! subsequence) matching, plus a literal-phrase highlighter for marking
//! matches in displayed text. Around that core sit the catalog model, saved
//! user preferences, interface translations, export helpers, an injected
//! "explain this code" capability, and one unapologetic toy.
//!
//! # Architecture
//!
//! ```text
//!                  ┌──────────────┐
//!                  │  matcher.rs  │  exact / fuzzy / none, case-folded
//!                  └──────┬───────┘
//!                    ┌────┴─────┐
//!                    ▼          ▼
//!           ┌────────────┐  ┌──────────────┐
//!           │ search.rs  │  │ highlight.rs │  word-split vs whole phrase:
//!           │ + scoring  │  │              │  deliberately different
//!           └─────┬──────┘  └──────────────┘
//!                 ▼
//!           ┌────────────┐   catalog.rs owns the records; settings.rs,
//!           │ catalog.rs │   i18n.rs, export.rs, explain.rs, demo.rs sit
//!           └────────────┘   beside the core and never reach into it
//! ```
//!
//! # Scoring weights
//!
//! Per query word, summed across words and modules:
//!
//! | Field              | Exact | Fuzzy |
//! |--------------------|-------|-------|
//! | course title       | 100   | 20    |
//! | category tag       | 50    | -     |
//! | module title       | 30    | 10    |
//! | module description | 10    | 5     |
//! | module code        | 5     | 2     |
//!
//! Courses scoring zero are dropped; the rest sort by descending score with
//! ties keeping catalog order. A blank query skips scoring and returns the
//! whole catalog in order.
//!
//! # Usage
//!
//! ```
//! use syllabus::{catalog, highlight, rank_scored};
//!
//! let courses = catalog::builtin().unwrap();
//! for hit in rank_scored(&courses, "go channels") {
//!     let spans = highlight(&hit.course.title, "go channels");
//!     assert!(hit.score >= 1);
//!     assert_eq!(
//!         spans.iter().map(|s| s.text).collect::<String>(),
//!         hit.course.title
//!     );
//! }
//! ```

// Module declarations
pub mod catalog;
pub mod demo;
pub mod explain;
pub mod export;
pub mod highlight;
pub mod i18n;
mod matcher;
pub mod scoring;
pub mod search;
pub mod settings;

#[doc(hidden)]
pub mod testing;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use catalog::{CodeSnippet, Course, Level, Module};
pub use highlight::{highlight, Span};
pub use i18n::{Lang, Phrases};
pub use matcher::{matches, MatchKind};
pub use search::{rank, rank_scored, ScoredCourse};
pub use settings::{Settings, Theme};
