use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://edusp-api.ip.tv/tms";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub workflow: WorkflowConfig,
}

// ── [api] ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Login endpoint. There is no public default; runs fail until it is set.
    #[serde(default)]
    pub auth_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            auth_url: None,
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

// ── [workflow] ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowConfig {
    #[serde(default)]
    pub target: TaskTarget,
    /// Upper bound on concurrent answer submissions within a category.
    /// `1` submits strictly one at a time.
    #[serde(default = "default_max_in_flight")]
    pub max_in_flight: usize,
    #[serde(default)]
    pub unknown_type_policy: UnknownTypePolicy,
    #[serde(default)]
    pub failure_policy: FailurePolicy,
}

fn default_max_in_flight() -> usize {
    1
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            target: TaskTarget::default(),
            max_in_flight: default_max_in_flight(),
            unknown_type_policy: UnknownTypePolicy::default(),
            failure_policy: FailurePolicy::default(),
        }
    }
}

/// Which tasks a run works on. Written as `"all"` or a task id in TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TaskTarget {
    /// Every pending task returned by the task listing.
    #[default]
    All,
    /// One known task; listing is skipped.
    Single(String),
}

impl TaskTarget {
    pub fn single(task_id: impl Into<String>) -> Result<Self, ConfigError> {
        let task_id = task_id.into();
        let task_id = task_id.trim();
        if task_id.is_empty() {
            return Err(ConfigError::Missing("workflow.target"));
        }
        Ok(Self::Single(task_id.to_string()))
    }
}

impl TryFrom<String> for TaskTarget {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Self::single(value)
        }
    }
}

impl From<TaskTarget> for String {
    fn from(target: TaskTarget) -> Self {
        match target {
            TaskTarget::All => "all".into(),
            TaskTarget::Single(id) => id,
        }
    }
}

impl fmt::Display for TaskTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all pending tasks"),
            Self::Single(id) => write!(f, "task {id}"),
        }
    }
}

/// What to do with a question whose type is none of the four categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum UnknownTypePolicy {
    /// Abort the run with `UnknownQuestionType`.
    #[default]
    Fail,
    /// Log and leave the question unanswered.
    Skip,
}

/// What a failing task does to the rest of the run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FailurePolicy {
    /// Any error stops the whole run.
    #[default]
    Abort,
    /// Record the task as failed and move on to the next one.
    ContinueWithNextTask,
}
