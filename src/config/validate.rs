use super::{Config, TaskTarget};
use crate::error::ConfigError;
use url::Url;

fn check_http_url(field: &str, raw: &str) -> Result<(), ConfigError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ConfigError::Validation(format!("{field} `{raw}` is not a valid URL: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::Validation(format!(
            "{field} must use http or https, got `{other}`"
        ))),
    }
}

impl Config {
    /// Check everything a run needs before the first request goes out.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_http_url("api.base_url", &self.api.base_url)?;

        match self.api.auth_url.as_deref().map(str::trim) {
            None | Some("") => return Err(ConfigError::Missing("api.auth_url")),
            Some(auth_url) => check_http_url("api.auth_url", auth_url)?,
        }

        if self.api.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "api.timeout_secs must be greater than zero".into(),
            ));
        }
        if self.api.connect_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "api.connect_timeout_secs must be greater than zero".into(),
            ));
        }
        if self.workflow.max_in_flight == 0 {
            return Err(ConfigError::Validation(
                "workflow.max_in_flight must be at least 1".into(),
            ));
        }
        if let TaskTarget::Single(task_id) = &self.workflow.target
            && task_id.trim().is_empty()
        {
            return Err(ConfigError::Missing("workflow.target"));
        }

        Ok(())
    }
}
