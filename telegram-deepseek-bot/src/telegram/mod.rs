//! Telegram transport layer: teloxide adapter, command set, long-polling runner.

mod adapter;
mod runner;

pub use adapter::TelegramBotAdapter;
pub use runner::{run_bot, run_repl, Command};
