use serde::{Deserialize, Serialize};
use serde_json::Value;

// Chat completions request body
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub temperature: f32,
    pub response_format: ResponseFormat<'a>,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ResponseFormat<'a> {
    #[serde(rename = "type")]
    pub format_type: &'a str,
    pub json_schema: JsonSchemaFormat<'a>,
}

#[derive(Debug, Serialize)]
pub struct JsonSchemaFormat<'a> {
    pub name: &'a str,
    pub strict: bool,
    pub schema: &'a Value,
}

// Chat completions response body
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub refusal: Option<String>,
}

/// Extracts the provider's error message from an error body.
///
/// OpenAI returns `{"error": {...}}`; some compatible endpoints wrap it in an
/// array.
pub fn error_message(body: &Value) -> Option<&str> {
    let error = match body {
        Value::Array(items) => items.first()?.get("error")?,
        _ => body.get("error")?,
    };
    error.get("message").and_then(Value::as_str)
}
