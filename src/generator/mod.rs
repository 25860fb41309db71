//! Text-generation service seam.
//!
//! Flows only see [`TextGenerator`]; the production implementation speaks the
//! OpenAI-compatible chat completions protocol.

pub mod chat;
mod wire;

pub use chat::ChatCompletionsGenerator;

use async_trait::async_trait;
use schemars::JsonSchema;
use serde_json::Value;

use crate::models::error::AppError;
use crate::utils::schema::output_schema;

/// Named JSON schema the generated output must conform to
#[derive(Debug, Clone, PartialEq)]
pub struct OutputSchema {
    pub name: String,
    pub schema: Value,
}

impl OutputSchema {
    #[must_use]
    pub fn of<T: JsonSchema>(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: output_schema::<T>(),
        }
    }
}

/// An external service that turns a prompt into structured output.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends `prompt` and returns the generated JSON value.
    ///
    /// The returned value is only requested to match `schema`; callers must
    /// validate it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Generation`] if the service fails, times out or
    /// returns something that is not JSON.
    async fn generate(&self, prompt: String, schema: OutputSchema) -> Result<Value, AppError>;
}
