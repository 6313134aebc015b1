//! Binary entry point: env + CLI → config → logging → long polling.

use anyhow::Result;
use clap::Parser;
use telegram_deepseek_bot::{init_tracing, load_config, run_bot, Cli, Commands};
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            init_tracing(config.log_file.as_deref())?;
            if let Err(e) = run_bot(config).await {
                error!(error = %e, "bot stopped with an error");
                return Err(e);
            }
            Ok(())
        }
    }
}
