//! Long-polling runner: wires the DeepSeek client, session store, and chat
//! handler, then polls Telegram. Messages are handled sequentially (one at a
//! time), matching the single-threaded loop the bot is designed around.

use std::sync::Arc;

use anyhow::Result;
use deepseek_client::{CompletionClient, DeepSeekClient};
use session_store::{InMemorySessionStore, SessionStore};
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{error, info};

use super::adapter::TelegramBotAdapter;
use crate::bot::Bot as CoreBot;
use crate::config::BotConfig;
use crate::handler::ChatHandler;

/// Bot commands; anything else that is text goes to the completion pipeline.
#[derive(BotCommands, Clone, Copy, Debug)]
#[command(rename_rule = "lowercase", description = "Supported commands:")]
pub enum Command {
    #[command(description = "start the conversation.")]
    Start,
    #[command(description = "how to use the bot.")]
    Help,
    #[command(description = "forget the conversation history.")]
    Clear,
}

/// Builds the handler from config and starts long polling. Blocks until the
/// polling loop exits.
pub async fn run_bot(config: BotConfig) -> Result<()> {
    let client: Arc<dyn CompletionClient> = Arc::new(
        DeepSeekClient::new(config.deepseek_token.clone())
            .with_base_url(config.deepseek_url.clone())
            .with_model(config.deepseek_model.clone())
            .with_system_prompt_opt(config.system_prompt.clone()),
    );
    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());

    let bot = teloxide::Bot::new(&config.telegram_token);
    let adapter: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(bot.clone()));

    let handler = Arc::new(ChatHandler::new(store, client, adapter));
    run_repl(bot, handler).await
}

/// Starts the long-polling REPL with the given teloxide Bot and handler.
///
/// Each update is dispatched to the handler and awaited inline; handler errors
/// are logged and the loop keeps polling.
pub async fn run_repl(bot: teloxide::Bot, handler: Arc<ChatHandler>) -> Result<()> {
    let bot_username = match bot.get_me().await {
        Ok(me) => {
            let username = me.user.username.clone().unwrap_or_default();
            info!(username = %username, "starting long polling");
            username
        }
        Err(e) => {
            error!(error = %e, "get_me failed; command parsing uses empty bot username");
            String::new()
        }
    };

    teloxide::repl(bot, move |_bot: teloxide::Bot, msg: Message| {
        let handler = handler.clone();
        let bot_username = bot_username.clone();

        async move {
            let chat_id = msg.chat.id.0;
            let Some(text) = msg.text() else {
                info!(chat_id, "ignoring non-text message");
                return Ok(());
            };
            let first_name = msg.from.as_ref().map(|user| user.first_name.as_str());
            info!(chat_id, message = %text, "received message");

            let outcome = match Command::parse(text, &bot_username) {
                Ok(Command::Start) => handler.handle_start(chat_id, first_name).await,
                Ok(Command::Help) => handler.handle_help(chat_id, first_name).await,
                Ok(Command::Clear) => handler.handle_clear(chat_id).await,
                Err(_) => handler.handle_text(chat_id, text).await,
            };

            if let Err(e) = outcome {
                error!(error = %e, chat_id, "message handling failed");
            }

            Ok(())
        }
    })
    .await;

    Ok(())
}
