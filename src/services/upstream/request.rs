use crate::types::message::{is_truthy, ChatRequest};
use serde::Serialize;
use serde_json::{Map, Value};

/// Body posted to `/api/v1/apps/<app_id>/completion`.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub input: CompletionInput,
    pub parameters: CompletionParameters,
    pub debug: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompletionInput {
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_prompt_params: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biz_params: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompletionParameters {
    pub incremental_output: bool,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            input: CompletionInput {
                prompt: prompt.into(),
                user_prompt_params: None,
                biz_params: None,
            },
            parameters: CompletionParameters {
                incremental_output: true,
            },
            debug: Map::new(),
        }
    }

    /// Builds the upstream body from a validated chat request. Optional
    /// params are forwarded only when they carry a truthy value.
    pub fn from_chat(prompt: &str, req: &ChatRequest) -> Self {
        let mut body = Self::new(prompt);
        body.input.user_prompt_params = req.user_prompt_params.clone().filter(is_truthy);
        body.input.biz_params = req.biz_params.clone().filter(is_truthy);
        body
    }
}
