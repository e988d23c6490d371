pub mod category;
pub mod classify;

pub use category::Category;
pub use classify::{ClassifiedQuestion, ClassifiedQuestions, classify};
