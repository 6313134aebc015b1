//! Wraps teloxide::Bot and implements [`crate::bot::Bot`]. Production code sends
//! messages via Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{ChatId, MessageId},
};

use crate::bot::Bot as CoreBot;
use crate::error::{BotError, Result};

/// Thin wrapper around teloxide::Bot that implements the transport seam.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat_id), text.to_string())
            .await
            .map_err(|e| BotError::Transport(e.to_string()))?;
        Ok(())
    }

    async fn send_message_and_return_id(&self, chat_id: i64, text: &str) -> Result<i32> {
        let sent = self
            .bot
            .send_message(ChatId(chat_id), text.to_string())
            .await
            .map_err(|e| BotError::Transport(e.to_string()))?;
        Ok(sent.id.0)
    }

    async fn delete_message(&self, chat_id: i64, message_id: i32) -> Result<()> {
        self.bot
            .delete_message(ChatId(chat_id), MessageId(message_id))
            .await
            .map_err(|e| BotError::Transport(e.to_string()))?;
        Ok(())
    }
}
