use async_trait::async_trait;
use lambda_runtime::tracing::{debug, info, warn};
use serde_json::Value;
use std::time::Instant;

use super::wire::{
    ChatMessage, ChatRequest, ChatResponse, JsonSchemaFormat, ResponseFormat, error_message,
};
use super::{OutputSchema, TextGenerator};
use crate::config::GeneratorConfig;
use crate::http::{HTTP_CLIENT, HttpClient, JsonRequest};
use crate::models::error::AppError;

/// Generator backed by an OpenAI-compatible `/chat/completions` endpoint with
/// JSON-schema structured output.
pub struct ChatCompletionsGenerator<'a> {
    config: GeneratorConfig,
    client: &'a dyn HttpClient,
}

impl<'a> ChatCompletionsGenerator<'a> {
    #[must_use]
    pub fn new(config: GeneratorConfig, client: &'a dyn HttpClient) -> Self {
        Self { config, client }
    }

    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}

impl ChatCompletionsGenerator<'static> {
    /// Generator configured from the environment using the global HTTP client
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(GeneratorConfig::from_env(), &*HTTP_CLIENT)
    }
}

#[async_trait]
impl TextGenerator for ChatCompletionsGenerator<'_> {
    async fn generate(&self, prompt: String, schema: OutputSchema) -> Result<Value, AppError> {
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            AppError::Generation(
                "no API key configured for the generation service (set GENERATOR_API_KEY)"
                    .to_string(),
            )
        })?;

        let body = serde_json::to_value(ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
            temperature: self.config.temperature,
            response_format: ResponseFormat {
                format_type: "json_schema",
                json_schema: JsonSchemaFormat {
                    name: &schema.name,
                    strict: true,
                    schema: &schema.schema,
                },
            },
        })
        .map_err(|e| AppError::Generation(format!("Failed to serialize request: {e}")))?;

        let url = self.config.chat_url();
        info!(model = %self.config.model, schema = %schema.name, "Sending generation request");
        debug!(prompt = %prompt, "Rendered prompt");

        let start = Instant::now();
        let response = self
            .client
            .post_json(JsonRequest {
                url: &url,
                bearer_token: Some(api_key),
                body: &body,
                timeout: self.config.timeout(),
            })
            .await
            .map_err(|e| {
                let timed_out = e
                    .downcast_ref::<reqwest::Error>()
                    .is_some_and(reqwest::Error::is_timeout);
                if timed_out {
                    AppError::Generation(format!(
                        "generation service timed out after {}s",
                        self.config.timeout_secs
                    ))
                } else {
                    AppError::Generation(format!("request to generation service failed: {e}"))
                }
            })?;

        info!(
            status = response.status,
            elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Received generation response"
        );

        if response.status == 429 {
            return Err(AppError::Generation(
                "rate limited by generation service".to_string(),
            ));
        }

        if !response.is_success() {
            let detail = error_message(&response.body).unwrap_or("no error detail");
            warn!(status = response.status, detail = %detail, "Generation service error");
            return Err(AppError::Generation(format!(
                "generation service returned HTTP {}: {detail}",
                response.status
            )));
        }

        let chat: ChatResponse = serde_json::from_value(response.body)
            .map_err(|e| AppError::Generation(format!("invalid response body: {e}")))?;

        debug!(model = ?chat.model, "Parsed chat response");

        let choice = chat
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Generation("no choices in response".to_string()))?;

        if let Some(refusal) = choice.message.refusal {
            return Err(AppError::Generation(format!("model refused: {refusal}")));
        }

        let content = choice
            .message
            .content
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| {
                AppError::Generation(format!(
                    "empty message content (finish reason: {})",
                    choice.finish_reason.as_deref().unwrap_or("unknown")
                ))
            })?;

        serde_json::from_str(strip_code_fence(&content)).map_err(|e| {
            AppError::Generation(format!("model output is not valid JSON: {e}"))
        })
    }
}

/// Some models wrap JSON output in a Markdown code fence despite being asked
/// for raw JSON.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map_or(trimmed, str::trim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```\n{\"a\":1}```"), "{\"a\":1}");
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_request() {
        let generator = ChatCompletionsGenerator::new(GeneratorConfig::default(), &*HTTP_CLIENT);
        let schema = OutputSchema {
            name: "test".into(),
            schema: serde_json::json!({}),
        };
        let result = generator.generate("prompt".into(), schema).await;
        assert!(matches!(result, Err(AppError::Generation(msg)) if msg.contains("API key")));
    }
}
