//! Reqwest-based [`CompletionClient`] for OpenAI-compatible endpoints.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, error, instrument};

use crate::error::CompletionError;
use crate::response::extract_content;
use crate::{ChatMessage, CompletionClient};

/// Default completion API base URL (DeepSeek).
pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com";

/// Default model name.
pub const DEFAULT_MODEL: &str = "deepseek-chat";

/// System prompt used when no custom prompt is configured.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant";

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

/// Chat-completion client for DeepSeek (or any OpenAI-compatible API).
///
/// Holds the bearer token, base URL, model name, and system prompt. The system
/// prompt is prepended to every request so callers pass dialogue turns only.
#[derive(Debug, Clone)]
pub struct DeepSeekClient {
    http: Client,
    api_key: String,
    base_url: String,
    model: String,
    system_prompt: Option<String>,
}

impl DeepSeekClient {
    /// Creates a client against the default DeepSeek endpoint.
    pub fn new(api_key: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            system_prompt: None,
        }
    }

    /// Points the client at a different OpenAI-compatible base URL.
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_system_prompt_opt(mut self, prompt: Option<String>) -> Self {
        self.system_prompt = prompt;
        self
    }

    fn system_content(&self) -> &str {
        self.system_prompt.as_deref().unwrap_or(DEFAULT_SYSTEM_PROMPT)
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CompletionClient for DeepSeekClient {
    #[instrument(skip(self, messages), fields(model = %self.model))]
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, CompletionError> {
        let mut request_messages = Vec::with_capacity(messages.len() + 1);
        request_messages.push(ChatMessage::system(self.system_content()));
        request_messages.extend(messages);

        let body = CompletionRequest {
            model: &self.model,
            messages: &request_messages,
            stream: false,
        };

        debug!(turns = request_messages.len(), "sending completion request");

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "completion request failed to reach the API");
                CompletionError::Connection(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), "completion API returned an error status");
            return Err(CompletionError::Status {
                status: status.as_u16(),
            });
        }

        let value: serde_json::Value = response
            .json()
            .await
            .map_err(CompletionError::InvalidJson)?;

        let content = extract_content(&value)?;
        debug!(reply_len = content.len(), "completion received");
        Ok(content)
    }
}
