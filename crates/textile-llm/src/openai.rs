//! OpenAI Provider Implementation
//!
//! Provides integration with an OpenAI-compatible text-completion API.
//!
//! # Features
//!
//! - Blocking HTTP communication, one request per call
//! - Configurable endpoint, model, temperature and token limit
//! - Timeout handling
//! - HTTP status mapped onto `LlmError` variants
//!
//! # Examples
//!
//! ```no_run
//! use textile_llm::{OpenAiProvider, ProviderConfig};
//! use textile_domain::traits::CompletionProvider;
//!
//! let provider = OpenAiProvider::new(ProviderConfig::default(), "sk-...").unwrap();
//! let text = provider.complete("Say hello").unwrap();
//! ```

use crate::config::ProviderConfig;
use crate::LlmError;
use reqwest::blocking::{Client, Request};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use textile_domain::traits::CompletionProvider;
use tracing::debug;

/// OpenAI-compatible completion provider
///
/// The HTTP client is built once and reused for every call.
pub struct OpenAiProvider {
    config: ProviderConfig,
    api_key: String,
    client: Client,
}

/// Request body for the completions API
#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    temperature: f32,
    max_tokens: u32,
}

/// Response from the completions API
#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    text: String,
}

impl OpenAiProvider {
    /// Create a new provider
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Config` if the configuration is invalid, the API key
    /// is empty, or the HTTP client cannot be built.
    pub fn new(config: ProviderConfig, api_key: impl Into<String>) -> Result<Self, LlmError> {
        config.validate().map_err(LlmError::Config)?;

        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(LlmError::Config("API key must not be empty".to_string()));
        }

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| LlmError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            config,
            api_key,
            client,
        })
    }

    /// The model requests are sent to
    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn completions_url(&self) -> String {
        format!("{}/v1/completions", self.config.endpoint.trim_end_matches('/'))
    }

    /// Send a prompt and return the generated text
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The service cannot be reached or times out
    /// - The credential is rejected
    /// - The model is not available
    /// - The rate limit or quota is exhausted
    /// - The response body is not a completion
    pub fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request = self.build_request(prompt)?;

        debug!(
            "POST {} (model {}, {} prompt chars)",
            request.url(),
            self.config.model,
            prompt.len()
        );

        let response = self
            .client
            .execute(request)
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| LlmError::Communication(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(status_error(status, &text, &self.config.model));
        }

        parse_completion_body(&text)
    }
}

impl OpenAiProvider {
    /// Completion request with bearer credential and JSON body
    fn build_request(&self, prompt: &str) -> Result<Request, LlmError> {
        let body = CompletionRequest {
            model: &self.config.model,
            prompt,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        self.client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .build()
            .map_err(|e| LlmError::Communication(format!("Invalid request: {}", e)))
    }
}

impl fmt::Debug for OpenAiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiProvider")
            .field("endpoint", &self.config.endpoint)
            .field("model", &self.config.model)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl CompletionProvider for OpenAiProvider {
    type Error = LlmError;

    fn complete(&self, prompt: &str) -> Result<String, Self::Error> {
        self.generate(prompt)
    }
}

/// Map a non-success HTTP status onto an error
fn status_error(status: StatusCode, body: &str, model: &str) -> LlmError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            LlmError::Authentication(format!("HTTP {}", status))
        }
        StatusCode::NOT_FOUND => LlmError::ModelNotAvailable(model.to_string()),
        StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimitExceeded,
        _ => LlmError::Communication(format!("HTTP {}: {}", status, body.trim())),
    }
}

/// Decode a completions response body into the first choice's text
fn parse_completion_body(body: &str) -> Result<String, LlmError> {
    let parsed: CompletionResponse = serde_json::from_str(body)
        .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

    parsed
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.text)
        .ok_or_else(|| LlmError::InvalidResponse("Response contained no choices".to_string()))
}
