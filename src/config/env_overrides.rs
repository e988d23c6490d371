use super::{Config, TaskTarget};
use tracing::warn;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(base_url) = std::env::var("EDUSP_BASE_URL")
            && !base_url.is_empty()
        {
            self.api.base_url = base_url;
        }

        if let Ok(auth_url) = std::env::var("EDUSP_AUTH_URL")
            && !auth_url.is_empty()
        {
            self.api.auth_url = Some(auth_url);
        }

        if let Ok(task_id) = std::env::var("EDUSP_TASK_ID")
            && !task_id.trim().is_empty()
        {
            match TaskTarget::try_from(task_id) {
                Ok(target) => self.workflow.target = target,
                Err(e) => warn!(error = %e, "ignoring EDUSP_TASK_ID"),
            }
        }

        if let Ok(timeout_str) = std::env::var("EDUSP_TIMEOUT_SECS")
            && let Ok(timeout) = timeout_str.parse::<u64>()
            && timeout > 0
        {
            self.api.timeout_secs = timeout;
        }

        if let Ok(limit_str) = std::env::var("EDUSP_MAX_IN_FLIGHT")
            && let Ok(limit) = limit_str.parse::<usize>()
            && limit > 0
        {
            self.workflow.max_in_flight = limit;
        }
    }
}
