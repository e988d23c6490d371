use crate::api::http_client::build_api_client;
use crate::api::scrub::error_parts;
use crate::api::traits::TaskApi;
use crate::api::types::{
    AuthRequest, AuthResponse, CorrectionResponse, Question, QuestionListResponse, Task,
    TaskListResponse,
};
use crate::config::ApiConfig;
use crate::credentials::{Credentials, SessionToken};
use crate::error::{ApiError, ConfigError};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

const API_KEY_HEADER: &str = "x-api-key";
const ACCEPT_VALUE: &str = "application/json, text/plain, */*";

/// `TaskApi` over HTTPS against the platform's task service.
pub struct HttpTaskApi {
    base_url: Url,
    auth_url: String,
    client: Client,
}

impl HttpTaskApi {
    /// Build a client from validated settings. The authentication URL has no
    /// usable default and must be configured.
    pub fn new(config: &ApiConfig) -> Result<Self, ConfigError> {
        let auth_url = config
            .auth_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::Missing("api.auth_url"))?;

        let base_url = Url::parse(config.base_url.trim()).map_err(|e| {
            ConfigError::Validation(format!("api.base_url `{}`: {e}", config.base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::Validation(format!(
                "api.base_url `{}` cannot carry a path",
                config.base_url
            )));
        }

        Ok(Self {
            base_url,
            auth_url: auth_url.to_string(),
            client: build_api_client(config.timeout_secs, config.connect_timeout_secs),
        })
    }

    /// Base URL extended by `segments`, each percent-encoded as one path
    /// segment so ids cannot alter the request target.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn get(&self, segments: &[&str], token: &SessionToken) -> RequestBuilder {
        self.client
            .get(self.endpoint(segments))
            .header(reqwest::header::ACCEPT, ACCEPT_VALUE)
            .header(API_KEY_HEADER, token.as_str())
    }

    fn post(&self, segments: &[&str], token: &SessionToken) -> RequestBuilder {
        self.client
            .post(self.endpoint(segments))
            .header(API_KEY_HEADER, token.as_str())
    }
}

async fn send(operation: &str, request: RequestBuilder) -> Result<Response, ApiError> {
    request
        .send()
        .await
        .map_err(|e| ApiError::from_reqwest(operation, &e))
}

async fn decode<T: DeserializeOwned>(operation: &str, response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::from_reqwest(operation, &e))
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    async fn authenticate(&self, credentials: &Credentials) -> Result<SessionToken, ApiError> {
        let body = AuthRequest {
            ra: credentials.identifier(),
            senha: credentials.secret(),
        };
        let response = send(
            "authentication",
            self.client.post(&self.auth_url).json(&body),
        )
        .await?;

        let status = response.status();
        if !status.is_success() {
            let (status, message) = error_parts(response).await;
            warn!(status, "authentication rejected");
            return Err(ApiError::Authentication { status, message });
        }

        let parsed: AuthResponse = decode("authentication", response).await?;
        match parsed.token {
            Some(token) if !token.trim().is_empty() => {
                debug!("authenticated");
                Ok(SessionToken::new(token))
            }
            _ => Err(ApiError::Authentication {
                status: status.as_u16(),
                message: "response carried no token".into(),
            }),
        }
    }

    async fn list_tasks(&self, token: &SessionToken) -> Result<Vec<Task>, ApiError> {
        let response = send("task listing", self.get(&["task"], token)).await?;

        if !response.status().is_success() {
            let (status, message) = error_parts(response).await;
            return Err(ApiError::Fetch {
                resource: "task list".into(),
                status,
                message,
            });
        }

        let parsed: TaskListResponse = decode("task listing", response).await?;
        debug!(count = parsed.tasks.len(), "tasks listed");
        Ok(parsed.tasks)
    }

    async fn fetch_questions(
        &self,
        token: &SessionToken,
        task_id: &str,
    ) -> Result<Vec<Question>, ApiError> {
        let request = self
            .get(&["task", task_id, "apply"], token)
            .query(&[("preview_mode", "false")]);
        let response = send("question fetch", request).await?;

        if !response.status().is_success() {
            let (status, message) = error_parts(response).await;
            return Err(ApiError::Fetch {
                resource: format!("questions of task {task_id}"),
                status,
                message,
            });
        }

        let parsed: QuestionListResponse = decode("question fetch", response).await?;
        let total = parsed.questions.len();
        let questions: Vec<Question> = parsed
            .questions
            .into_iter()
            .filter(|q| !q.is_info())
            .collect();
        debug!(
            task_id,
            total,
            kept = questions.len(),
            "questions fetched"
        );
        Ok(questions)
    }

    async fn submit_answer(
        &self,
        token: &SessionToken,
        task_id: &str,
        question_id: &str,
        payload: &Value,
    ) -> Result<String, ApiError> {
        let request = self
            .post(&["task", task_id, "question", question_id, "correct"], token)
            .json(payload);
        let response = send("answer submission", request).await?;

        if !response.status().is_success() {
            let (status, message) = error_parts(response).await;
            return Err(ApiError::Submission {
                task_id: task_id.to_string(),
                question_id: question_id.to_string(),
                status,
                message,
            });
        }

        let parsed: CorrectionResponse = decode("answer submission", response).await?;
        Ok(parsed.comment.unwrap_or_default())
    }

    fn name(&self) -> &str {
        "http"
    }
}
