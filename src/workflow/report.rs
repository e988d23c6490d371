use crate::answers::AnswerSheet;
use crate::questions::ClassifiedQuestions;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TaskOutcome {
    Completed { answers: AnswerSheet },
    Failed { error: String },
}

/// Result of working through one task.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskReport {
    pub task_id: String,
    #[serde(flatten)]
    pub outcome: TaskOutcome,
}

impl TaskReport {
    pub fn completed(task_id: impl Into<String>, answers: AnswerSheet) -> Self {
        Self {
            task_id: task_id.into(),
            outcome: TaskOutcome::Completed { answers },
        }
    }

    pub fn failed(task_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            outcome: TaskOutcome::Failed {
                error: error.into(),
            },
        }
    }

    pub fn answers(&self) -> Option<&AnswerSheet> {
        match &self.outcome {
            TaskOutcome::Completed { answers } => Some(answers),
            TaskOutcome::Failed { .. } => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.outcome, TaskOutcome::Completed { .. })
    }
}

/// Everything a run did, in task order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunReport {
    pub tasks: Vec<TaskReport>,
}

impl RunReport {
    pub fn task(&self, task_id: &str) -> Option<&TaskReport> {
        self.tasks.iter().find(|t| t.task_id == task_id)
    }

    pub fn completed(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_completed()).count()
    }

    pub fn failed(&self) -> usize {
        self.tasks.len() - self.completed()
    }

    /// Answers submitted across all completed tasks.
    pub fn answered(&self) -> usize {
        self.tasks
            .iter()
            .filter_map(TaskReport::answers)
            .map(AnswerSheet::len)
            .sum()
    }
}

/// Classification of one task, produced without submitting anything.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskPreview {
    pub task_id: String,
    pub questions: ClassifiedQuestions,
}
