pub mod streaming;
pub mod upstream;

pub use streaming::{relay_events, LineBuffer};
pub use upstream::{CompletionRequest, UpstreamClient, UpstreamError};
