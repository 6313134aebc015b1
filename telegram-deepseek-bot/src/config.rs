//! Bot config: Telegram token, DeepSeek API, system prompt, logging. Loaded from env.

use anyhow::Result;
use deepseek_client::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use std::env;

/// Full bot config. Use [`BotConfig::load`] for env-based loading.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// TELEGRAM_TOKEN (or the CLI `--token` override)
    pub telegram_token: String,
    /// DEEPSEEK_TOKEN
    pub deepseek_token: String,
    /// DEEPSEEK_URL; completion API base URL
    pub deepseek_url: String,
    /// DEEPSEEK_MODEL
    pub deepseek_model: String,
    /// SYSTEM_PROMPT; None uses the client default
    pub system_prompt: Option<String>,
    /// LOG_FILE; None logs to stdout only
    pub log_file: Option<String>,
}

impl BotConfig {
    /// Loads config from environment variables. `token` overrides TELEGRAM_TOKEN
    /// if provided. Fails fast with a message naming every missing required
    /// variable, so a misconfigured deployment dies before polling starts.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram_token = token.or_else(|| env::var("TELEGRAM_TOKEN").ok());
        let deepseek_token = env::var("DEEPSEEK_TOKEN").ok();

        let (telegram_token, deepseek_token) = match (telegram_token, deepseek_token) {
            (Some(telegram), Some(deepseek)) => (telegram, deepseek),
            (telegram, deepseek) => {
                let mut missing = Vec::new();
                if telegram.is_none() {
                    missing.push("TELEGRAM_TOKEN");
                }
                if deepseek.is_none() {
                    missing.push("DEEPSEEK_TOKEN");
                }
                anyhow::bail!(
                    "Missing required environment variables: {}",
                    missing.join(", ")
                );
            }
        };

        let deepseek_url =
            env::var("DEEPSEEK_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let deepseek_model =
            env::var("DEEPSEEK_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let system_prompt = env::var("SYSTEM_PROMPT")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let log_file = env::var("LOG_FILE").ok().filter(|s| !s.trim().is_empty());

        Ok(Self {
            telegram_token,
            deepseek_token,
            deepseek_url,
            deepseek_model,
            system_prompt,
            log_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;
    use std::env;

    use super::*;

    fn clear_bot_env() {
        env::remove_var("TELEGRAM_TOKEN");
        env::remove_var("DEEPSEEK_TOKEN");
        env::remove_var("DEEPSEEK_URL");
        env::remove_var("DEEPSEEK_MODEL");
        env::remove_var("SYSTEM_PROMPT");
        env::remove_var("LOG_FILE");
    }

    #[test]
    #[serial]
    fn load_with_defaults() {
        clear_bot_env();
        env::set_var("TELEGRAM_TOKEN", "tg-token");
        env::set_var("DEEPSEEK_TOKEN", "ds-token");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.telegram_token, "tg-token");
        assert_eq!(config.deepseek_token, "ds-token");
        assert_eq!(config.deepseek_url, DEFAULT_BASE_URL);
        assert_eq!(config.deepseek_model, DEFAULT_MODEL);
        assert!(config.system_prompt.is_none());
        assert!(config.log_file.is_none());
    }

    #[test]
    #[serial]
    fn cli_token_overrides_env() {
        clear_bot_env();
        env::set_var("TELEGRAM_TOKEN", "from-env");
        env::set_var("DEEPSEEK_TOKEN", "ds-token");

        let config = BotConfig::load(Some("from-cli".to_string())).unwrap();
        assert_eq!(config.telegram_token, "from-cli");
    }

    #[test]
    #[serial]
    fn missing_tokens_are_all_named() {
        clear_bot_env();

        let err = BotConfig::load(None).unwrap_err().to_string();
        assert!(err.contains("TELEGRAM_TOKEN"));
        assert!(err.contains("DEEPSEEK_TOKEN"));
    }

    #[test]
    #[serial]
    fn blank_system_prompt_is_ignored() {
        clear_bot_env();
        env::set_var("TELEGRAM_TOKEN", "tg-token");
        env::set_var("DEEPSEEK_TOKEN", "ds-token");
        env::set_var("SYSTEM_PROMPT", "   ");

        let config = BotConfig::load(None).unwrap();
        assert!(config.system_prompt.is_none());
    }

    #[test]
    #[serial]
    fn custom_url_and_model_are_used() {
        clear_bot_env();
        env::set_var("TELEGRAM_TOKEN", "tg-token");
        env::set_var("DEEPSEEK_TOKEN", "ds-token");
        env::set_var("DEEPSEEK_URL", "http://localhost:8080");
        env::set_var("DEEPSEEK_MODEL", "deepseek-reasoner");

        let config = BotConfig::load(None).unwrap();
        assert_eq!(config.deepseek_url, "http://localhost:8080");
        assert_eq!(config.deepseek_model, "deepseek-reasoner");
    }
}
