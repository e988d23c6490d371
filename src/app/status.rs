use edusp_tasks::config::Config;
use edusp_tasks::ui::style as ui;
use edusp_tasks::workflow::{RunReport, TaskOutcome, TaskPreview};

pub fn render_config(config: &Config) -> String {
    let auth_url = config
        .api
        .auth_url
        .as_deref()
        .map_or_else(|| ui::muted("(not set)"), ui::setting);

    [
        format!("◆ {}", ui::heading("edusp-tasks configuration")),
        String::new(),
        format!("  version         {}", env!("CARGO_PKG_VERSION")),
        format!("  config          {}", config.config_path.display()),
        String::new(),
        format!("  base url        {}", ui::setting(&config.api.base_url)),
        format!("  auth url        {auth_url}"),
        format!("  timeout         {}s", config.api.timeout_secs),
        format!("  connect timeout {}s", config.api.connect_timeout_secs),
        String::new(),
        format!("  target          {}", config.workflow.target),
        format!("  max in flight   {}", config.workflow.max_in_flight),
        format!("  unknown types   {}", config.workflow.unknown_type_policy),
        format!("  on failure      {}", config.workflow.failure_policy),
    ]
    .join("\n")
}

pub fn render_report(report: &RunReport) -> String {
    let mut lines = Vec::with_capacity(report.tasks.len() * 4 + 2);
    for task in &report.tasks {
        match &task.outcome {
            TaskOutcome::Completed { answers } => {
                lines.push(format!(
                    "{} task {} ({} answers)",
                    ui::status_mark(true),
                    task.task_id,
                    answers.len()
                ));
                for (question_id, comment) in answers {
                    lines.push(format!("    {} {comment}", ui::label(question_id)));
                }
            }
            TaskOutcome::Failed { error } => {
                lines.push(format!(
                    "{} task {}: {error}",
                    ui::status_mark(false),
                    task.task_id
                ));
            }
        }
    }
    lines.push(String::new());
    lines.push(format!(
        "{} tasks completed, {} failed, {} answers submitted",
        report.completed(),
        report.failed(),
        report.answered()
    ));
    lines.join("\n")
}

pub fn render_previews(previews: &[TaskPreview]) -> String {
    let mut lines = Vec::new();
    for preview in previews {
        lines.push(ui::heading(format!(
            "task {} ({} questions)",
            preview.task_id,
            preview.questions.len()
        )));
        for (category, questions) in preview.questions.iter() {
            let ids: Vec<&str> = questions.iter().map(|q| q.id.as_str()).collect();
            lines.push(format!(
                "  {:<11} {:>3}  {}",
                ui::label(category),
                questions.len(),
                ui::muted(ids.join(", "))
            ));
        }
    }
    if lines.is_empty() {
        lines.push(ui::muted("no tasks"));
    }
    lines.join("\n")
}
