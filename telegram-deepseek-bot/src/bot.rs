//! Bot abstraction for sending and deleting messages.
//!
//! [`Bot`] is transport-agnostic; production code uses
//! [`TelegramBotAdapter`](crate::telegram::TelegramBotAdapter), tests substitute
//! a recording implementation.

use async_trait::async_trait;

use crate::error::Result;

/// Abstraction over the outbound side of the chat transport.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<()>;

    /// Sends a message and returns its transport id, for later deletion
    /// (the processing placeholder is removed once the reply is delivered).
    async fn send_message_and_return_id(&self, chat_id: i64, text: &str) -> Result<i32>;

    /// Deletes an already-sent message.
    async fn delete_message(&self, chat_id: i64, message_id: i32) -> Result<()>;
}
