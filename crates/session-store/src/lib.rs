//! # Session store
//!
//! Per-chat conversation history behind the [`SessionStore`] trait. The bot
//! holds `Arc<dyn SessionStore>`, so the mapping's lifecycle and persistence
//! policy are decided by the composition root, not the bot runtime. The shipped
//! implementation is [`InMemorySessionStore`]: nothing is persisted and history
//! is lost on restart.

use async_trait::async_trait;
use deepseek_client::ChatMessage;

mod inmemory;

pub use inmemory::InMemorySessionStore;

/// Conversation history keyed by chat identifier.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the chat's turns in call order; empty for an unseen chat id.
    /// Reading never creates an entry.
    async fn history(&self, chat_id: i64) -> Result<Vec<ChatMessage>, anyhow::Error>;

    /// Appends a turn, lazily creating the chat's history on first use.
    async fn append(&self, chat_id: i64, turn: ChatMessage) -> Result<(), anyhow::Error>;

    /// Drops the chat's history entirely.
    async fn clear(&self, chat_id: i64) -> Result<(), anyhow::Error>;
}
