use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::sync::LazyLock;
use std::time::Duration;

/// A JSON POST to send through an [`HttpClient`].
#[derive(Debug, Clone)]
pub struct JsonRequest<'a> {
    pub url: &'a str,
    pub bearer_token: Option<&'a str>,
    pub body: &'a Value,
    pub timeout: Duration,
}

/// Status and body of a completed HTTP exchange.
///
/// `body` is `Value::Null` when the response was not valid JSON.
#[derive(Debug, Clone)]
pub struct JsonResponse {
    pub status: u16,
    pub body: Value,
}

impl JsonResponse {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Trait for HTTP client operations to enable testing with mocks.
///
/// This trait abstracts HTTP operations to allow dependency injection
/// for testing purposes, preventing tests from making real network calls.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Send a POST request with a JSON body and return the status and JSON body.
    ///
    /// Non-2xx statuses are returned as responses, not errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent, times out, or the body
    /// cannot be read.
    async fn post_json(
        &self,
        request: JsonRequest<'_>,
    ) -> Result<JsonResponse, Box<dyn std::error::Error + Send + Sync>>;
}

/// Production HTTP client implementation using reqwest.
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn post_json(
        &self,
        request: JsonRequest<'_>,
    ) -> Result<JsonResponse, Box<dyn std::error::Error + Send + Sync>> {
        let mut builder = self
            .client
            .post(request.url)
            .timeout(request.timeout)
            .json(request.body);

        if let Some(token) = request.bearer_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);

        Ok(JsonResponse { status, body })
    }
}

/// Global HTTP client for production use
pub static HTTP_CLIENT: LazyLock<ReqwestClient> = LazyLock::new(|| {
    ReqwestClient::new(Client::new())
});
