pub mod commands;
pub mod prompts;

pub use commands::{Cli, Commands, TargetArgs};
