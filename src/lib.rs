#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

pub mod answers;
pub mod api;
pub mod config;
pub mod credentials;
pub mod error;
pub mod notify;
pub mod questions;
pub mod ui;
pub mod workflow;

pub use config::Config;
pub use credentials::{Credentials, SessionToken};
pub use error::{ApiError, ClassifyError, ConfigError, EduspError, Result};
pub use workflow::{RunReport, run_workflow};
