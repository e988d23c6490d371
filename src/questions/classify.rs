use crate::api::types::Question;
use crate::config::UnknownTypePolicy;
use crate::error::ClassifyError;
use crate::questions::category::Category;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// The parts of a question kept after classification. Options and
/// statement are carried for display only; answers never depend on them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedQuestion {
    pub id: String,
    pub options: Value,
    pub statement: Option<String>,
}

impl From<Question> for ClassifiedQuestion {
    fn from(question: Question) -> Self {
        Self {
            id: question.id,
            options: question.options,
            statement: question.statement,
        }
    }
}

/// Questions of one task grouped by category. Every category is present,
/// empty when nothing matched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ClassifiedQuestions {
    buckets: BTreeMap<Category, Vec<ClassifiedQuestion>>,
}

impl ClassifiedQuestions {
    pub fn new() -> Self {
        Self {
            buckets: Category::ALL
                .into_iter()
                .map(|category| (category, Vec::new()))
                .collect(),
        }
    }

    pub fn get(&self, category: Category) -> &[ClassifiedQuestion] {
        self.buckets
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn push(&mut self, category: Category, question: ClassifiedQuestion) {
        self.buckets.entry(category).or_default().push(question);
    }

    /// Categories with their questions, in submission order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[ClassifiedQuestion])> {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    /// Total questions across all categories.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ClassifiedQuestions {
    fn default() -> Self {
        Self::new()
    }
}

/// Group questions by category, preserving input order within each one.
///
/// Informational entries are dropped. A type outside the four categories is
/// handled according to `policy`.
pub fn classify(
    questions: Vec<Question>,
    policy: UnknownTypePolicy,
) -> Result<ClassifiedQuestions, ClassifyError> {
    let mut classified = ClassifiedQuestions::new();

    for question in questions {
        if question.is_info() {
            debug!(question_id = %question.id, "skipping informational entry");
            continue;
        }

        match Category::from_wire(&question.kind) {
            Some(category) => classified.push(category, question.into()),
            None => match policy {
                UnknownTypePolicy::Fail => {
                    return Err(ClassifyError::UnknownQuestionType {
                        question_id: question.id,
                        kind: question.kind,
                    });
                }
                UnknownTypePolicy::Skip => {
                    warn!(
                        question_id = %question.id,
                        kind = %question.kind,
                        "skipping question of unknown type"
                    );
                }
            },
        }
    }

    Ok(classified)
}
