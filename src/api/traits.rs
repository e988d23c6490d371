use crate::api::types::{Question, Task};
use crate::credentials::{Credentials, SessionToken};
use crate::error::ApiError;
use async_trait::async_trait;
use serde_json::Value;

/// The remote task platform, one method per endpoint.
///
/// `HttpTaskApi` talks to the real service; tests substitute in-memory
/// fakes to observe exactly which calls the workflow makes.
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// Exchange credentials for a session token.
    async fn authenticate(&self, credentials: &Credentials) -> Result<SessionToken, ApiError>;

    /// Pending tasks of the authenticated student, in platform order.
    async fn list_tasks(&self, token: &SessionToken) -> Result<Vec<Task>, ApiError>;

    /// Questions of one task with informational entries already removed.
    async fn fetch_questions(
        &self,
        token: &SessionToken,
        task_id: &str,
    ) -> Result<Vec<Question>, ApiError>;

    /// Post an answer payload for one question and return the server's
    /// feedback comment.
    async fn submit_answer(
        &self,
        token: &SessionToken,
        task_id: &str,
        question_id: &str,
        payload: &Value,
    ) -> Result<String, ApiError>;

    /// Human-readable name of this backend
    fn name(&self) -> &str;
}
