pub mod payload;
pub mod submitter;

pub use payload::{CLOUD_PLACEHOLDER_WORD, canned_payload};
pub use submitter::{AnswerSheet, submit_all, submit_category};
