//! Client for the DashScope application completion API

mod client;
mod request;

pub use client::{UpstreamClient, UpstreamError};
pub use request::{CompletionInput, CompletionParameters, CompletionRequest};
