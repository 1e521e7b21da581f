use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /chat`. Every field is kept as raw JSON so that any value
/// type is accepted and judged by truthiness.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default)]
    pub user_prompt_params: Option<Value>,
    #[serde(default)]
    pub biz_params: Option<Value>,
}

impl ChatRequest {
    /// The prompt text, if `message` is truthy. Strings are used as-is; any
    /// other truthy value is sent as its compact JSON text.
    pub fn prompt(&self) -> Option<String> {
        match self.message.as_ref().filter(|m| is_truthy(m))? {
            Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// JavaScript-style truthiness: `null`, `false`, `0` and `""` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
