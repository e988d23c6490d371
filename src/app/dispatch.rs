use crate::cli::prompts::collect_credentials;
use crate::cli::{Cli, Commands, TargetArgs};
use anyhow::{Result, bail};
use edusp_tasks::api::HttpTaskApi;
use edusp_tasks::config::{Config, FailurePolicy, TaskTarget, UnknownTypePolicy};
use edusp_tasks::notify::{NoopNotifier, create_notifier};
use edusp_tasks::workflow::{Workflow, run_workflow};
use tracing::info;

use crate::app::status::{render_config, render_previews, render_report};

/// CLI target flags win over config and environment.
fn apply_target(config: &mut Config, target: TargetArgs) -> Result<()> {
    if let Some(task_id) = target.task_id {
        config.workflow.target = TaskTarget::single(task_id)?;
    } else if target.all {
        config.workflow.target = TaskTarget::All;
    }
    Ok(())
}

pub async fn dispatch(cli: Cli, mut config: Config) -> Result<()> {
    match cli.command {
        Commands::Run {
            credentials,
            target,
            max_in_flight,
            skip_unknown,
            continue_on_error,
            quiet,
            json,
        } => {
            apply_target(&mut config, target)?;
            if let Some(limit) = max_in_flight {
                config.workflow.max_in_flight = limit;
            }
            if skip_unknown {
                config.workflow.unknown_type_policy = UnknownTypePolicy::Skip;
            }
            if continue_on_error {
                config.workflow.failure_policy = FailurePolicy::ContinueWithNextTask;
            }
            config.validate()?;

            let credentials = collect_credentials(credentials)?;
            let api = HttpTaskApi::new(&config.api)?;
            let notifier = create_notifier(quiet);

            let report =
                run_workflow(&api, &config.workflow, credentials, notifier.as_ref()).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", render_report(&report));
            }

            if report.failed() > 0 {
                bail!(
                    "{} of {} tasks failed",
                    report.failed(),
                    report.tasks.len()
                );
            }
            Ok(())
        }

        Commands::Preview {
            credentials,
            target,
            skip_unknown,
        } => {
            apply_target(&mut config, target)?;
            if skip_unknown {
                config.workflow.unknown_type_policy = UnknownTypePolicy::Skip;
            }
            config.validate()?;

            let credentials = collect_credentials(credentials)?;
            let api = HttpTaskApi::new(&config.api)?;
            info!(target = %config.workflow.target, "previewing");

            let previews = Workflow::new(&api, &config.workflow, &NoopNotifier)
                .preview(credentials)
                .await?;
            println!("{}", render_previews(&previews));
            Ok(())
        }

        Commands::Config => {
            println!("{}", render_config(&config));
            Ok(())
        }
    }
}
