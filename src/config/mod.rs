mod env_overrides;
mod loader;
mod types;
mod validate;

pub use types::{
    ApiConfig, Config, DEFAULT_BASE_URL, FailurePolicy, TaskTarget, UnknownTypePolicy,
    WorkflowConfig,
};
