//! Canned answer payloads, one fixed body per category.
//!
//! These never look at a question's statement or options. The same body is
//! posted for every question of a category, on every run.

use crate::questions::Category;
use serde_json::{Value, json};

/// Word sent for every free-text ("cloud") question.
///
/// This is a fixed placeholder, not a guess: no word selection exists, so
/// cloud answers are only correct by coincidence.
pub const CLOUD_PLACEHOLDER_WORD: &str = "palavra";

pub fn canned_payload(category: Category) -> Value {
    match category {
        Category::TrueFalse => json!({ "answer": { "answer": { "0": true } } }),
        Category::Cloud => json!({ "answer": { "answer": [CLOUD_PLACEHOLDER_WORD] } }),
        Category::Single => json!({ "answer": { "0": true } }),
        Category::Multi => json!({ "answer": { "0": true, "1": true } }),
    }
}
