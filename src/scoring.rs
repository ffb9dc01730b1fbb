//! Score weights for ranking courses against a query.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! ## WEIGHT HIERARCHY
//! Within every field, an exact hit MUST outscore a fuzzy hit, and fields
//! MUST keep this order for hits of the same kind:
//!
//! ```text
//! course title > category > module title > module description > module code
//! ```
//!
//! With current values, per query word:
//!
//! ```text
//!                     exact   fuzzy
//! course title          100      20
//! category               50       0
//! module title           30      10
//! module description     10       5
//! module code             5       2
//! ```
//!
//! Category tags are two or three characters, so a fuzzy tier there would
//! match almost anything; it is fixed at zero.
//!
//! ## ADDITIVITY
//! Weights accumulate across query words and across modules. There is no
//! cross-word or cross-field dominance guarantee: enough module hits can
//! outrank a lone title hit, and that is intended. Anything that does score
//! scores at least 1, so "kept" and "positive score" mean the same thing.

use crate::matcher::MatchKind;

/// Exact hit on the course title.
pub const TITLE_EXACT: u32 = 100;
/// Fuzzy hit on the course title.
pub const TITLE_FUZZY: u32 = 20;
/// Exact hit on the category tag. No fuzzy tier.
pub const CATEGORY_EXACT: u32 = 50;
/// Exact hit on a module title.
pub const MODULE_TITLE_EXACT: u32 = 30;
/// Fuzzy hit on a module title.
pub const MODULE_TITLE_FUZZY: u32 = 10;
/// Exact hit on a module description.
pub const MODULE_DESC_EXACT: u32 = 10;
/// Fuzzy hit on a module description.
pub const MODULE_DESC_FUZZY: u32 = 5;
/// Exact hit inside a module's code sample.
pub const CODE_EXACT: u32 = 5;
/// Fuzzy hit inside a module's code sample.
pub const CODE_FUZZY: u32 = 2;

#[inline]
fn tiered(kind: MatchKind, exact: u32, fuzzy: u32) -> u32 {
    match kind {
        MatchKind::Exact => exact,
        MatchKind::Fuzzy => fuzzy,
        MatchKind::None => 0,
    }
}

/// Weight of one query word against the course title.
pub fn title_score(kind: MatchKind) -> u32 {
    tiered(kind, TITLE_EXACT, TITLE_FUZZY)
}

/// Weight of one query word against the category tag. Exact only.
pub fn category_score(kind: MatchKind) -> u32 {
    tiered(kind, CATEGORY_EXACT, 0)
}

/// Weight of one query word against a module title.
pub fn module_title_score(kind: MatchKind) -> u32 {
    tiered(kind, MODULE_TITLE_EXACT, MODULE_TITLE_FUZZY)
}

/// Weight of one query word against a module description.
pub fn module_description_score(kind: MatchKind) -> u32 {
    tiered(kind, MODULE_DESC_EXACT, MODULE_DESC_FUZZY)
}

/// Weight of one query word against a module's code sample.
pub fn code_score(kind: MatchKind) -> u32 {
    tiered(kind, CODE_EXACT, CODE_FUZZY)
}
