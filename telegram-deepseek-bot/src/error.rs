//! Error types for the bot.
//!
//! [`BotError`] is the top-level error; completion failures carry the typed
//! [`CompletionError`](deepseek_client::CompletionError) so the handler can
//! surface the exact category to the chat.

use thiserror::Error;

/// Top-level error for the bot (transport, completion, session store, config).
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Telegram transport error: {0}")]
    Transport(String),

    #[error("{0}")]
    Completion(#[from] deepseek_client::CompletionError),

    #[error("Session store error: {0}")]
    Session(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result type for bot operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
