//! Generation service configuration.
//!
//! Values come from the Lambda environment; anything unset falls back to
//! [`GeneratorConfig::default`].

use std::time::Duration;

use lambda_runtime::tracing::warn;

/// Google's OpenAI-compatible endpoint for Gemini models
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_TEMPERATURE: f32 = 0.4;

/// API key variables, checked in order
const API_KEY_VARS: [&str; 3] = ["GENERATOR_API_KEY", "GEMINI_API_KEY", "GOOGLE_API_KEY"];

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Base URL of an OpenAI-compatible chat completions API
    pub base_url: String,
    pub model: String,
    /// `None` makes every generation fail; validation still runs first
    pub api_key: Option<String>,
    pub timeout_secs: u64,
    pub temperature: f32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl GeneratorConfig {
    /// Reads configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// Unparseable numeric values are logged and replaced by their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = API_KEY_VARS.iter().find_map(|key| non_empty(*key));

        let timeout_secs = non_empty("GENERATOR_TIMEOUT_SECS")
            .and_then(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .or_else(|| {
                        warn!(value = %raw, "Ignoring invalid GENERATOR_TIMEOUT_SECS");
                        None
                    })
            })
            .unwrap_or(defaults.timeout_secs);

        let temperature = non_empty("GENERATOR_TEMPERATURE")
            .and_then(|raw| {
                raw.trim()
                    .parse::<f32>()
                    .ok()
                    .filter(|t| (0.0..=2.0).contains(t))
                    .or_else(|| {
                        warn!(value = %raw, "Ignoring invalid GENERATOR_TEMPERATURE");
                        None
                    })
            })
            .unwrap_or(defaults.temperature);

        Self {
            base_url: non_empty("GENERATOR_BASE_URL")
                .map_or(defaults.base_url, |url| url.trim_end_matches('/').to_string()),
            model: non_empty("GENERATOR_MODEL").unwrap_or(defaults.model),
            api_key,
            timeout_secs,
            temperature,
        }
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    #[must_use]
    pub fn chat_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = GeneratorConfig::from_lookup(lookup(&[]));
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_api_key_fallback_order() {
        let config = GeneratorConfig::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "gemini-key"),
            ("GOOGLE_API_KEY", "google-key"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("gemini-key"));

        let config = GeneratorConfig::from_lookup(lookup(&[
            ("GENERATOR_API_KEY", "primary"),
            ("GEMINI_API_KEY", "gemini-key"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("primary"));
    }

    #[test]
    fn test_overrides_and_invalid_values() {
        let config = GeneratorConfig::from_lookup(lookup(&[
            ("GENERATOR_BASE_URL", "http://localhost:8080/v1/"),
            ("GENERATOR_MODEL", "local-model"),
            ("GENERATOR_TIMEOUT_SECS", "not-a-number"),
            ("GENERATOR_TEMPERATURE", "0.9"),
        ]));
        assert_eq!(config.chat_url(), "http://localhost:8080/v1/chat/completions");
        assert_eq!(config.model, "local-model");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!((config.temperature - 0.9).abs() < f32::EPSILON);
    }
}
