use super::request::CompletionRequest;
use crate::config::Config;
use reqwest::{header, StatusCode};

pub const SSE_HEADER: &str = "X-DashScope-SSE";

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error! status: {0}")]
    Status(StatusCode),
}

/// Opens streaming completion requests against one configured application.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    url: String,
    api_key: String,
}

impl UpstreamClient {
    pub fn new(config: &Config) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            url: config.completion_url(),
            api_key: config.dashscope_key.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Sends the request and returns the response once its status is known.
    /// The body is left unread so the caller can consume it incrementally.
    pub async fn open_stream(
        &self,
        body: &CompletionRequest,
    ) -> Result<reqwest::Response, UpstreamError> {
        tracing::debug!("POST {}", self.url);

        let response = self
            .http
            .post(&self.url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(header::CONTENT_TYPE, "application/json")
            .header(SSE_HEADER, "enable")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(UpstreamError::Status(status));
        }
        Ok(response)
    }
}
