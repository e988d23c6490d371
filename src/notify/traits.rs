/// Events the workflow reports to whoever is watching the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyEvent {
    TaskCompleted { task_id: String, answered: usize },
    TaskFailed { task_id: String, message: String },
    RunCompleted { tasks: usize, failed: usize },
    RunFailed { message: String },
}

impl NotifyEvent {
    /// One-line text suitable for showing to the user.
    pub fn message(&self) -> String {
        match self {
            Self::TaskCompleted { task_id, answered } => {
                format!("Task {task_id} completed ({answered} answers submitted).")
            }
            Self::TaskFailed { task_id, message } => {
                format!("Task {task_id} failed: {message}")
            }
            Self::RunCompleted { tasks, failed: 0 } => {
                format!("All activities completed ({tasks} tasks).")
            }
            Self::RunCompleted { tasks, failed } => {
                format!("{failed} of {tasks} tasks failed; the rest were completed.")
            }
            Self::RunFailed { message } => message.clone(),
        }
    }

    pub fn is_failure(&self) -> bool {
        match self {
            Self::TaskFailed { .. } | Self::RunFailed { .. } => true,
            Self::RunCompleted { failed, .. } => *failed > 0,
            Self::TaskCompleted { .. } => false,
        }
    }
}

/// Surfaces workflow progress; implement for any front end.
pub trait Notifier: Send + Sync {
    fn notify(&self, event: &NotifyEvent);

    /// Human-readable name of this notifier
    fn name(&self) -> &str;
}
