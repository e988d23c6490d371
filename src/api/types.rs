use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Wire type name of purely informational entries, which carry no answer.
pub const INFO_KIND: &str = "info";

/// A pending task on the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
}

/// A question of a task, as returned by the apply endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub options: Value,
    #[serde(default)]
    pub statement: Option<String>,
}

impl Question {
    pub fn is_info(&self) -> bool {
        self.kind == INFO_KIND
    }
}

// ── Request / response bodies ────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub(crate) struct AuthRequest<'a> {
    pub ra: &'a str,
    pub senha: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TaskListResponse {
    #[serde(default)]
    pub tasks: Vec<Task>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuestionListResponse {
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CorrectionResponse {
    #[serde(default)]
    pub comment: Option<String>,
}

/// Accept ids sent either as JSON strings or as numbers.
fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "expected a string or numeric id, got {other}"
        ))),
    }
}
