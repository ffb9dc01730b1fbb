//! Course export: markdown, JSON, and a one-line share blurb.
//!
//! These are pure string builders. Writing the result somewhere (file,
//! clipboard, stdout) is the caller's business.

use std::io;

use crate::catalog::Course;

/// Render a course as a standalone markdown document.
///
/// Module code samples become fenced blocks tagged with their language. The
/// fence grows past any backtick run inside the body, so a sample that
/// itself shows markdown cannot break out of its block.
pub fn course_markdown(course: &Course) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {}\n\n", course.title));
    out.push_str(&format!(
        "**{}** | {} | {} modules\n\n",
        course.category,
        course.level,
        course.modules.len()
    ));
    out.push_str(&course.description);
    out.push_str("\n\n");
    for module in &course.modules {
        out.push_str(&format!("## {}\n\n{}\n\n", module.title, module.description));
        if let Some(code) = &module.code {
            let fence = fence_for(&code.body);
            out.push_str(&format!("{}{}\n{}\n{}\n\n", fence, code.lang, code.body, fence));
        }
    }
    out
}

/// Render a course as pretty-printed JSON, same shape as the catalog file.
pub fn course_json(course: &Course) -> io::Result<String> {
    serde_json::to_string_pretty(course).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Short single-line blurb for clipboards and share sheets.
pub fn share_text(course: &Course) -> String {
    format!(
        "{} ({}, {}) - {} modules on DevLearning Hub",
        course.title,
        course.category,
        course.level,
        course.modules.len()
    )
}

/// Smallest backtick fence that the body cannot terminate early.
fn fence_for(body: &str) -> String {
    let longest_run = body
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    "`".repeat(longest_run.max(2) + 1)
}
