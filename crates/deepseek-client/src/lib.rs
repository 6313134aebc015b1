//! # DeepSeek completion client
//!
//! Defines the [`CompletionClient`] trait and a reqwest-based implementation for
//! OpenAI-compatible chat-completion endpoints (DeepSeek by default).
//!
//! The response body is validated field-by-field before any text is handed to the
//! caller: see [`response::extract_content`]. Every failure mode is typed in
//! [`CompletionError`] so the bot can surface it to the chat as plain text.

use async_trait::async_trait;
use serde::Serialize;

mod client;
mod error;
pub mod response;

pub use client::{DeepSeekClient, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_SYSTEM_PROMPT};
pub use error::{CompletionError, ResponseShapeError};
pub use response::extract_content;

/// Role of a chat turn, one-to-one with the OpenAI Chat Completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instruction (API `role: "system"`).
    System,
    /// User message (API `role: "user"`).
    User,
    /// Model reply (API `role: "assistant"`).
    Assistant,
}

/// A single chat turn, one-to-one with one element of the API `messages` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Completion client interface: request a model reply for an ordered list of turns.
///
/// Object-safe so the bot can hold `Arc<dyn CompletionClient>` and tests can
/// substitute a stub.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Returns the model reply text for the given turns. Implementations prepend
    /// their own system prompt.
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, CompletionError>;
}
