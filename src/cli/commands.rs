use clap::{Args, Parser, Subcommand};

/// `edusp-tasks` - Completes pending platform tasks with canned answers.
#[derive(Parser, Debug)]
#[command(name = "edusp-tasks")]
#[command(version)]
#[command(about = "Completes pending platform tasks with canned answers.", long_about = None)]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Authenticate and answer every targeted task
    Run {
        #[command(flatten)]
        credentials: CredentialArgs,

        #[command(flatten)]
        target: TargetArgs,

        /// Maximum concurrent answer submissions (default from config: 1)
        #[arg(long)]
        max_in_flight: Option<usize>,

        /// Skip questions of unknown type instead of failing the run
        #[arg(long)]
        skip_unknown: bool,

        /// Keep going with the next task when one fails
        #[arg(long)]
        continue_on_error: bool,

        /// Only log, no console notifications
        #[arg(short, long)]
        quiet: bool,

        /// Print the run report as JSON on stdout
        #[arg(long)]
        json: bool,
    },

    /// Authenticate and show how each task's questions classify; submits nothing
    Preview {
        #[command(flatten)]
        credentials: CredentialArgs,

        #[command(flatten)]
        target: TargetArgs,

        /// Skip questions of unknown type instead of failing
        #[arg(long)]
        skip_unknown: bool,
    },

    /// Show the effective configuration
    Config,
}

#[derive(Args, Debug, Default)]
pub struct CredentialArgs {
    /// Student registration number (prompted when omitted on a terminal)
    #[arg(long, env = "EDUSP_RA")]
    pub ra: Option<String>,

    /// Password (prompted with hidden input when omitted on a terminal)
    #[arg(long, env = "EDUSP_SENHA", hide_env_values = true)]
    pub senha: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct TargetArgs {
    /// Work on this task only, skipping task discovery
    #[arg(long, conflicts_with = "all")]
    pub task_id: Option<String>,

    /// Discover and work on every pending task
    #[arg(long)]
    pub all: bool,
}
