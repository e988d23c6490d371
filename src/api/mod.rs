pub mod client;
pub mod http_client;
pub mod scrub;
pub mod traits;
pub mod types;

pub use client::HttpTaskApi;
pub use scrub::{sanitize_api_error, scrub_secret_patterns};
pub use traits::TaskApi;
pub use types::{Question, Task};
