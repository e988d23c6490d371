use super::traits::{Notifier, NotifyEvent};
use tracing::{info, warn};

/// Emits each event as a structured tracing record.
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for LogNotifier {
    fn notify(&self, event: &NotifyEvent) {
        match event {
            NotifyEvent::TaskCompleted { task_id, answered } => {
                info!(task_id = %task_id, answered = answered, "task.completed");
            }
            NotifyEvent::TaskFailed { task_id, message } => {
                warn!(task_id = %task_id, error = %message, "task.failed");
            }
            NotifyEvent::RunCompleted { tasks, failed: 0 } => {
                info!(tasks = tasks, "run.completed");
            }
            NotifyEvent::RunCompleted { tasks, failed } => {
                warn!(tasks = tasks, failed = failed, "run.completed_with_failures");
            }
            NotifyEvent::RunFailed { message } => {
                warn!(error = %message, "run.failed");
            }
        }
    }

    fn name(&self) -> &str {
        "log"
    }
}
