pub mod errors;
pub mod message;

pub use errors::{AppError, ErrorBody};
pub use message::{is_truthy, ChatRequest};
