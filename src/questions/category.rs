use serde::{Deserialize, Serialize};
use strum::Display;

/// Answerable question categories, in the order a task's answers are
/// submitted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Category {
    /// Boolean statements.
    TrueFalse,
    /// Free-text "word cloud" answers.
    Cloud,
    /// Single-choice.
    Single,
    /// Multiple-choice.
    Multi,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::TrueFalse,
        Category::Cloud,
        Category::Single,
        Category::Multi,
    ];

    /// Resolve a question's wire `type`. Descriptive aliases are accepted
    /// alongside the platform's own names.
    pub fn from_wire(kind: &str) -> Option<Self> {
        match kind {
            "true-false" | "boolean" => Some(Self::TrueFalse),
            "cloud" | "free-text" => Some(Self::Cloud),
            "single" | "single-choice" => Some(Self::Single),
            "multi" | "multi-choice" => Some(Self::Multi),
            _ => None,
        }
    }
}
