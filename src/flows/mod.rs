//! Schema-validated prompt flows.
//!
//! Every flow is a single linear pass: validate input, render the prompt,
//! invoke the generator once, validate output. Nothing is cached or retried and
//! invocations share no state.

pub mod anomaly;
pub mod protocol;

pub use anomaly::{AnalyzeAnomalyFlow, analyze_anomaly};
pub use protocol::{SummarizeProtocolFlow, summarize_protocol_behavior};

use lambda_runtime::tracing::{error, info};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

use crate::generator::{OutputSchema, TextGenerator};
use crate::models::error::AppError;
use crate::models::validation::Validate;

/// A named prompt flow with typed input and output.
pub trait PromptFlow {
    type Input: Validate + Send;
    type Output: DeserializeOwned + JsonSchema + Validate;

    /// Flow name, also used as the structured-output schema name
    const NAME: &'static str;

    /// Substitutes validated input fields into the flow's fixed template
    fn render(input: &Self::Input) -> String;
}

/// Runs `F` once against `generator`.
///
/// # Errors
///
/// - [`AppError::Validation`] if `input` is invalid; the generator is not called.
/// - [`AppError::Generation`] if the generator fails or its output is missing a
///   field, has the wrong type or contains an empty field.
pub async fn run_flow<F: PromptFlow>(
    generator: &dyn TextGenerator,
    input: F::Input,
) -> Result<F::Output, AppError> {
    input.validate()?;

    let prompt = F::render(&input);
    let schema = OutputSchema::of::<F::Output>(F::NAME);

    info!(flow = F::NAME, "Invoking generation service");

    let value = generator.generate(prompt, schema).await.map_err(|e| {
        error!(flow = F::NAME, error = %e, "Generation failed");
        match e {
            AppError::Generation(_) => e,
            other => AppError::Generation(other.to_string()),
        }
    })?;

    let output: F::Output = serde_json::from_value(value).map_err(|e| {
        error!(flow = F::NAME, error = %e, "Output failed schema validation");
        AppError::Generation(format!("output does not match schema: {e}"))
    })?;

    output.validate().map_err(|e| {
        error!(flow = F::NAME, error = %e, "Output failed validation");
        AppError::Generation(format!("output does not match schema: {e}"))
    })?;

    Ok(output)
}
