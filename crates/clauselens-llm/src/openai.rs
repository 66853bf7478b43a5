//! OpenAI-compatible chat-completions provider
//!
//! Bearer-token HTTP integration with a chat-completions API. Credentials
//! and endpoint are passed in as explicit configuration; nothing here reads
//! environment variables or other ambient process state.
//!
//! Transport failures are terminal for the request: a 429 maps to a
//! distinguished rate-limit error, everything else to a generic
//! communication failure. Failed requests are never retried silently; the
//! caller decides whether to offer the user a retry.
//!
//! # Examples
//!
//! ```no_run
//! use clauselens_llm::{OpenAiConfig, OpenAiProvider};
//!
//! let config = OpenAiConfig::new("sk-...");
//! let provider = OpenAiProvider::new(config);
//! // provider.complete(system, prompt) is async; see the method docs
//! ```

use crate::LlmError;
use clauselens_domain::traits::LlmProvider as LlmProviderTrait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default chat-completions endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Default model
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Default timeout for completion requests (120 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Default completion token budget
pub const DEFAULT_MAX_TOKENS: u32 = 4000;

/// Default sampling temperature (low, for reproducible analysis)
pub const DEFAULT_TEMPERATURE: f64 = 0.1;

/// Explicit configuration for the OpenAI provider
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// Bearer token for the API
    pub api_key: String,

    /// Chat-completions endpoint URL
    pub endpoint: String,

    /// Model identifier (e.g. "gpt-4")
    pub model: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Completion token budget per request
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f64,
}

impl OpenAiConfig {
    /// Create a configuration with defaults for everything but the key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Override the endpoint (for proxies or compatible APIs)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// Chat-completions API provider
///
/// Communicates with an OpenAI-compatible chat-completions endpoint.
pub struct OpenAiProvider {
    config: OpenAiConfig,
    client: reqwest::Client,
}

/// Request body for the chat-completions API
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f64,
}

/// One chat message
#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

/// Response from the chat-completions API
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl OpenAiProvider {
    /// Create a new provider from explicit configuration
    pub fn new(config: OpenAiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { config, client }
    }

    /// Model identifier this provider is configured with
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Generate a completion for a system prompt and user prompt pair
    ///
    /// # Errors
    ///
    /// - `MissingCredentials` when no API key is configured
    /// - `RateLimitExceeded` on HTTP 429
    /// - `Communication` on other non-2xx responses or network failures
    /// - `InvalidResponse` when the body cannot be decoded or has no choices
    pub async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        if self.config.api_key.is_empty() {
            return Err(LlmError::MissingCredentials);
        }

        let request_body = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt.to_string(),
                },
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmError::RateLimitExceeded);
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Communication(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        chat_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| LlmError::InvalidResponse("Response contained no choices".to_string()))
    }
}

impl LlmProviderTrait for OpenAiProvider {
    type Error = LlmError;

    fn complete(&self, system: &str, prompt: &str) -> Result<String, Self::Error> {
        // Blocking wrapper for the async call; used from spawn_blocking
        // contexts. A current-thread runtime is enough for one request and
        // avoids spinning up a full worker pool per call.
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| LlmError::Other(format!("Runtime error: {}", e)))?;
        runtime.block_on(self.complete(system, prompt))
    }

    fn is_rate_limited(error: &Self::Error) -> bool {
        matches!(error, LlmError::RateLimitExceeded)
    }
}
