//! The end-to-end run: authenticate, pick tasks, classify each task's
//! questions and post the canned answers.

pub mod report;

pub use report::{RunReport, TaskOutcome, TaskPreview, TaskReport};

use crate::answers::{AnswerSheet, submit_all};
use crate::api::TaskApi;
use crate::config::{FailurePolicy, TaskTarget, WorkflowConfig};
use crate::credentials::{Credentials, SessionToken};
use crate::error::{ConfigError, Result};
use crate::notify::{Notifier, NotifyEvent};
use crate::questions::{ClassifiedQuestions, classify};
use tracing::{debug, error, info, warn};

/// Generic text shown to the user when a run fails. Details go to the log.
pub const FAILURE_MESSAGE: &str = "Failed to complete activities.";

pub struct Workflow<'a> {
    api: &'a dyn TaskApi,
    settings: &'a WorkflowConfig,
    notifier: &'a dyn Notifier,
}

impl<'a> Workflow<'a> {
    pub fn new(
        api: &'a dyn TaskApi,
        settings: &'a WorkflowConfig,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            api,
            settings,
            notifier,
        }
    }

    /// Run every targeted task. The credentials are dropped as soon as the
    /// session token is issued.
    pub async fn run(&self, credentials: Credentials) -> Result<RunReport> {
        let token = self.api.authenticate(&credentials).await?;
        drop(credentials);

        let task_ids = self.resolve_targets(&token).await?;
        info!(
            backend = self.api.name(),
            target = %self.settings.target,
            tasks = task_ids.len(),
            "run.start"
        );

        let mut report = RunReport::default();
        for task_id in task_ids {
            match self.complete_task(&token, &task_id).await {
                Ok(answers) => {
                    self.notifier.notify(&NotifyEvent::TaskCompleted {
                        task_id: task_id.clone(),
                        answered: answers.len(),
                    });
                    report.tasks.push(TaskReport::completed(task_id, answers));
                }
                Err(err) => {
                    warn!(task_id = %task_id, error = %err, "task failed");
                    match self.settings.failure_policy {
                        FailurePolicy::Abort => return Err(err),
                        FailurePolicy::ContinueWithNextTask => {
                            let message = err.to_string();
                            self.notifier.notify(&NotifyEvent::TaskFailed {
                                task_id: task_id.clone(),
                                message: message.clone(),
                            });
                            report.tasks.push(TaskReport::failed(task_id, message));
                        }
                    }
                }
            }
        }

        self.notifier.notify(&NotifyEvent::RunCompleted {
            tasks: report.tasks.len(),
            failed: report.failed(),
        });
        Ok(report)
    }

    /// Authenticate and classify every targeted task without submitting.
    pub async fn preview(&self, credentials: Credentials) -> Result<Vec<TaskPreview>> {
        let token = self.api.authenticate(&credentials).await?;
        drop(credentials);

        let mut previews = Vec::new();
        for task_id in self.resolve_targets(&token).await? {
            let questions = self.classified_questions(&token, &task_id).await?;
            previews.push(TaskPreview { task_id, questions });
        }
        Ok(previews)
    }

    async fn resolve_targets(&self, token: &SessionToken) -> Result<Vec<String>> {
        match &self.settings.target {
            TaskTarget::All => {
                let tasks = self.api.list_tasks(token).await?;
                Ok(tasks.into_iter().map(|task| task.id).collect())
            }
            TaskTarget::Single(task_id) if task_id.trim().is_empty() => {
                Err(ConfigError::Missing("workflow.target").into())
            }
            TaskTarget::Single(task_id) => Ok(vec![task_id.clone()]),
        }
    }

    async fn classified_questions(
        &self,
        token: &SessionToken,
        task_id: &str,
    ) -> Result<ClassifiedQuestions> {
        let questions = self.api.fetch_questions(token, task_id).await?;
        let classified = classify(questions, self.settings.unknown_type_policy)?;
        debug!(task_id, questions = classified.len(), "task classified");
        Ok(classified)
    }

    /// Fetch, classify and answer one task.
    pub async fn complete_task(&self, token: &SessionToken, task_id: &str) -> Result<AnswerSheet> {
        let classified = self.classified_questions(token, task_id).await?;
        let answers = submit_all(
            self.api,
            token,
            task_id,
            &classified,
            self.settings.max_in_flight,
        )
        .await?;
        Ok(answers)
    }
}

/// Top-level run boundary: any error is logged, reported to the notifier as
/// a generic failure and returned.
pub async fn run_workflow(
    api: &dyn TaskApi,
    settings: &WorkflowConfig,
    credentials: Credentials,
    notifier: &dyn Notifier,
) -> Result<RunReport> {
    match Workflow::new(api, settings, notifier).run(credentials).await {
        Ok(report) => Ok(report),
        Err(err) => {
            error!(error = %err, "run failed");
            notifier.notify(&NotifyEvent::RunFailed {
                message: FAILURE_MESSAGE.into(),
            });
            Err(err)
        }
    }
}
