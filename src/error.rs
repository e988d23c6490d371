use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `edusp-tasks`.
///
/// Each stage of the workflow defines its own error variant. Library callers
/// can match on these to tell an authentication failure from a failed
/// submission; the binary continues to use `anyhow::Result` for ad-hoc
/// context chains.
#[derive(Debug, Error)]
pub enum EduspError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Remote API ──────────────────────────────────────────────────────
    #[error("api: {0}")]
    Api(#[from] ApiError),

    // ── Classification ──────────────────────────────────────────────────
    #[error("classify: {0}")]
    Classify(#[from] ClassifyError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("required setting `{0}` is not set")]
    Missing(&'static str),
}

// ─── Remote API errors ──────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("authentication failed ({status}): {message}")]
    Authentication { status: u16, message: String },

    #[error("fetching {resource} failed ({status}): {message}")]
    Fetch {
        resource: String,
        status: u16,
        message: String,
    },

    #[error("submitting question {question_id} of task {task_id} failed ({status}): {message}")]
    Submission {
        task_id: String,
        question_id: String,
        status: u16,
        message: String,
    },

    #[error("{operation} timed out")]
    Timeout { operation: String },

    #[error("{operation} request failed: {message}")]
    Transport { operation: String, message: String },

    #[error("could not decode {operation} response: {message}")]
    Decode { operation: String, message: String },
}

impl ApiError {
    /// Map a transport-level `reqwest` error for `operation`, splitting out
    /// timeouts so callers can tell a slow endpoint from a broken one.
    pub fn from_reqwest(operation: &str, err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                operation: operation.to_string(),
            }
        } else if err.is_decode() {
            Self::Decode {
                operation: operation.to_string(),
                message: err.to_string(),
            }
        } else {
            Self::Transport {
                operation: operation.to_string(),
                message: err.to_string(),
            }
        }
    }
}

// ─── Classification errors ──────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("question {question_id} has unknown type `{kind}`")]
    UnknownQuestionType { question_id: String, kind: String },
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, EduspError>;
