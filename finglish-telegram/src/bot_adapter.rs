//! Wraps teloxide::Bot and implements [`finglish_core::Bot`]. Production code sends messages via Telegram; tests can substitute another Bot impl.

use async_trait::async_trait;
use finglish_core::{Bot as CoreBot, BotError, Chat, Result};
use teloxide::{prelude::*, types::ChatId};
use tracing::info;

/// Thin wrapper around teloxide::Bot that implements finglish-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

fn parse_url(name: &str, url: &str) -> Result<reqwest::Url> {
    reqwest::Url::parse(url)
        .map_err(|e| BotError::Config(format!("{} is not a valid URL ({}): {}", name, url, e)))
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Builds the teloxide Bot from a token. `api_url` replaces the public Bot API base URL
    /// (self-hosted Bot API server, or a mock server in tests).
    pub fn from_token(token: &str, api_url: Option<&str>) -> Result<Self> {
        let mut bot = teloxide::Bot::new(token);
        if let Some(url) = api_url {
            bot = bot.set_api_url(parse_url("Telegram API URL", url)?);
        }
        Ok(Self::new(bot))
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }

    /// Registers `url` as the bot's webhook (`setWebhook`).
    pub async fn register_webhook(&self, url: &str) -> Result<()> {
        let url = parse_url("Webhook URL", url)?;
        self.bot
            .set_webhook(url.clone())
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        info!(url = %url, "Webhook registered");
        Ok(())
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }
}
