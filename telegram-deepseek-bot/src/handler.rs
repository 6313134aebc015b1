//! Chat handler: the message pipeline behind every command and text message.
//!
//! Holds the injected seams (session store, completion client, bot transport)
//! and owns the flow: append the user turn, call the model with the
//! accumulated history, chunk the reply, deliver it, record the assistant
//! turn. Pipeline failures are logged and surfaced to the chat as plain text;
//! they never kill the polling loop.

use std::sync::Arc;

use deepseek_client::{ChatMessage, CompletionClient};
use session_store::SessionStore;
use tracing::{debug, error, info, warn};

use crate::bot::Bot;
use crate::chunk::split_message;
use crate::error::{BotError, Result};

/// Placeholder sent while the model is working; deleted after the reply lands.
pub const PROCESSING_NOTICE: &str =
    "⌛ DeepSeek is working on your request. Hang on, your answer is coming...";

fn address(first_name: Option<&str>) -> String {
    first_name.map(|name| format!(", {name}")).unwrap_or_default()
}

/// Message pipeline with injected store, client, and transport.
pub struct ChatHandler {
    store: Arc<dyn SessionStore>,
    client: Arc<dyn CompletionClient>,
    bot: Arc<dyn Bot>,
}

impl ChatHandler {
    pub fn new(
        store: Arc<dyn SessionStore>,
        client: Arc<dyn CompletionClient>,
        bot: Arc<dyn Bot>,
    ) -> Self {
        Self { store, client, bot }
    }

    /// `/start`: greets the user by first name and explains how to begin.
    pub async fn handle_start(&self, chat_id: i64, first_name: Option<&str>) -> Result<()> {
        info!(chat_id, "start command");
        let text = format!(
            "Hello{}, I am an AI assistant! To get going, just send me a question \
             and I will gladly find an answer for you!",
            address(first_name)
        );
        self.bot.send_message(chat_id, &text).await
    }

    /// `/help`: short usage instructions.
    pub async fn handle_help(&self, chat_id: i64, first_name: Option<&str>) -> Result<()> {
        info!(chat_id, "help command");
        let text = format!(
            "Lost? No problem! Type any question into the chat and I will find \
             the best answer I can. Good luck{}!",
            address(first_name)
        );
        self.bot.send_message(chat_id, &text).await
    }

    /// `/clear`: drops the chat's history so the next question starts fresh.
    pub async fn handle_clear(&self, chat_id: i64) -> Result<()> {
        info!(chat_id, "clear command");
        self.store
            .clear(chat_id)
            .await
            .map_err(|e| BotError::Session(e.to_string()))?;
        self.bot
            .send_message(chat_id, "Conversation history cleared. We start from a clean slate.")
            .await
    }

    /// Free text: the full completion pipeline.
    ///
    /// Completion and history failures are reported to the chat and swallowed;
    /// the returned error covers only the transport (nothing more can be sent).
    pub async fn handle_text(&self, chat_id: i64, text: &str) -> Result<()> {
        debug!(chat_id, request = %text, "user request");

        // Best effort: a missing placeholder is not worth failing the request.
        let placeholder = match self
            .bot
            .send_message_and_return_id(chat_id, PROCESSING_NOTICE)
            .await
        {
            Ok(id) => Some(id),
            Err(e) => {
                warn!(error = %e, chat_id, "could not send processing notice");
                None
            }
        };

        let reply = match self.respond(chat_id, text).await {
            Ok(reply) => reply,
            Err(e) => {
                error!(error = %e, chat_id, request = %text, "completion pipeline failed");
                let notice = format!("Something went wrong while answering: {e}.");
                return self.bot.send_message(chat_id, &notice).await;
            }
        };

        for chunk in split_message(&reply) {
            self.bot.send_message(chat_id, chunk).await?;
        }

        if let Some(message_id) = placeholder {
            if let Err(e) = self.bot.delete_message(chat_id, message_id).await {
                warn!(error = %e, chat_id, message_id, "could not delete processing notice");
            }
        }

        self.store
            .append(chat_id, ChatMessage::assistant(reply.clone()))
            .await
            .map_err(|e| BotError::Session(e.to_string()))?;

        info!(chat_id, reply_len = reply.len(), "reply delivered");
        Ok(())
    }

    /// Records the user turn and asks the model with the accumulated history.
    async fn respond(&self, chat_id: i64, text: &str) -> Result<String> {
        self.store
            .append(chat_id, ChatMessage::user(text))
            .await
            .map_err(|e| BotError::Session(e.to_string()))?;

        let history = self
            .store
            .history(chat_id)
            .await
            .map_err(|e| BotError::Session(e.to_string()))?;

        debug!(chat_id, turns = history.len(), "requesting completion");
        let reply = self.client.complete(history).await?;
        Ok(reply)
    }
}
