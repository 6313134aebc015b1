//! # Telegram DeepSeek bot
//!
//! Telegram front-end for the DeepSeek chat-completion API. Receives text
//! messages over long polling, keeps per-chat history in an injected session
//! store, asks the model for a reply with the accumulated context, and sends
//! the answer back in chunks of at most [`TELEGRAM_MESSAGE_LIMIT`] characters.
//!
//! Core pieces: [`ChatHandler`] (the pipeline), [`Bot`] (transport seam),
//! [`telegram`] (teloxide adapter + long-polling runner), [`BotConfig`]
//! (env-based config), [`logger`] (tracing setup).

pub mod bot;
pub mod chunk;
pub mod cli;
pub mod config;
pub mod error;
pub mod handler;
pub mod logger;
pub mod telegram;

pub use bot::Bot;
pub use chunk::{split_message, TELEGRAM_MESSAGE_LIMIT};
pub use cli::{load_config, Cli, Commands};
pub use config::BotConfig;
pub use error::{BotError, Result};
pub use handler::ChatHandler;
pub use logger::init_tracing;
pub use telegram::{run_bot, TelegramBotAdapter};
