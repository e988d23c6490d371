#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use edusp_tasks::api::{Question, Task, TaskApi};
use edusp_tasks::config::WorkflowConfig;
use edusp_tasks::notify::{Notifier, NotifyEvent};
use edusp_tasks::{ApiError, Credentials, SessionToken};

/// One call made against the fake platform.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Authenticate,
    ListTasks,
    FetchQuestions(String),
    Submit {
        task_id: String,
        question_id: String,
        payload: Value,
    },
}

/// In-memory platform that records every call in order.
#[derive(Default)]
pub struct FakePlatform {
    reject_login: bool,
    tasks: Vec<String>,
    questions: HashMap<String, Vec<Question>>,
    comments: HashMap<String, String>,
    failing_fetch: Option<String>,
    failing_submission: Option<String>,
    calls: Mutex<Vec<Call>>,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting_login(mut self) -> Self {
        self.reject_login = true;
        self
    }

    pub fn with_task(mut self, task_id: &str, questions: Vec<Question>) -> Self {
        self.tasks.push(task_id.to_string());
        self.questions.insert(task_id.to_string(), questions);
        self
    }

    pub fn with_comment(mut self, question_id: &str, comment: &str) -> Self {
        self.comments
            .insert(question_id.to_string(), comment.to_string());
        self
    }

    pub fn failing_fetch_of(mut self, task_id: &str) -> Self {
        self.failing_fetch = Some(task_id.to_string());
        self
    }

    pub fn failing_submission_of(mut self, question_id: &str) -> Self {
        self.failing_submission = Some(question_id.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn submissions(&self) -> Vec<(String, String, Value)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Submit {
                    task_id,
                    question_id,
                    payload,
                } => Some((task_id, question_id, payload)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl TaskApi for FakePlatform {
    async fn authenticate(&self, credentials: &Credentials) -> Result<SessionToken, ApiError> {
        self.record(Call::Authenticate);
        if self.reject_login {
            return Err(ApiError::Authentication {
                status: 401,
                message: "invalid credentials".into(),
            });
        }
        Ok(SessionToken::new(format!("token-{}", credentials.identifier())))
    }

    async fn list_tasks(&self, _token: &SessionToken) -> Result<Vec<Task>, ApiError> {
        self.record(Call::ListTasks);
        Ok(self
            .tasks
            .iter()
            .map(|id| Task { id: id.clone() })
            .collect())
    }

    async fn fetch_questions(
        &self,
        _token: &SessionToken,
        task_id: &str,
    ) -> Result<Vec<Question>, ApiError> {
        self.record(Call::FetchQuestions(task_id.to_string()));
        if self.failing_fetch.as_deref() == Some(task_id) {
            return Err(ApiError::Fetch {
                resource: format!("questions of task {task_id}"),
                status: 500,
                message: "unavailable".into(),
            });
        }
        Ok(self.questions.get(task_id).cloned().unwrap_or_default())
    }

    async fn submit_answer(
        &self,
        _token: &SessionToken,
        task_id: &str,
        question_id: &str,
        payload: &Value,
    ) -> Result<String, ApiError> {
        self.record(Call::Submit {
            task_id: task_id.to_string(),
            question_id: question_id.to_string(),
            payload: payload.clone(),
        });
        if self.failing_submission.as_deref() == Some(question_id) {
            return Err(ApiError::Submission {
                task_id: task_id.to_string(),
                question_id: question_id.to_string(),
                status: 500,
                message: "rejected".into(),
            });
        }
        Ok(self
            .comments
            .get(question_id)
            .cloned()
            .unwrap_or_else(|| "ok".to_string()))
    }

    fn name(&self) -> &str {
        "fake"
    }
}

/// Keeps every notification for later assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<NotifyEvent>>,
}

impl RecordingNotifier {
    pub fn events(&self) -> Vec<NotifyEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, event: &NotifyEvent) {
        self.events.lock().unwrap().push(event.clone());
    }

    fn name(&self) -> &str {
        "recording"
    }
}

pub fn question(id: &str, kind: &str) -> Question {
    Question {
        id: id.to_string(),
        kind: kind.to_string(),
        options: Value::Null,
        statement: Some(format!("statement of {id}")),
    }
}

pub fn credentials() -> Credentials {
    Credentials::new("1234567sp", "senha").unwrap()
}

pub fn settings() -> WorkflowConfig {
    WorkflowConfig::default()
}
