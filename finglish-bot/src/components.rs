//! Builds the bot's shared pieces from config: Telegram adapter, transliteration backend, handler chain.

use std::sync::Arc;

use anyhow::Result;
use behnevis_client::BehnevisClient;
use finglish_core::Bot;
use finglish_telegram::TelegramBotAdapter;
use handler_chain::HandlerChain;
use handlers::{LoggingHandler, TransliterationHandler};
use transliterator::{LocalTransliterator, Transliterate};

use crate::config::{BackendKind, BotConfig};

#[derive(Clone)]
pub struct BotComponents {
    pub bot: TelegramBotAdapter,
    pub backend: Arc<dyn Transliterate>,
    pub handler_chain: HandlerChain,
}

/// Backend selected by `config.backend`.
pub fn build_backend(config: &BotConfig) -> Result<Arc<dyn Transliterate>> {
    let backend: Arc<dyn Transliterate> = match config.backend {
        BackendKind::Local => Arc::new(LocalTransliterator::new()),
        BackendKind::Behnevis => match &config.behnevis_api_url {
            Some(url) => Arc::new(BehnevisClient::with_api_url(url.clone())?),
            None => Arc::new(BehnevisClient::new()?),
        },
    };
    Ok(backend)
}

/// Logging first, transliteration last.
pub fn build_handler_chain(bot: Arc<dyn Bot>, backend: Arc<dyn Transliterate>) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(TransliterationHandler::new(bot, backend)))
}

pub fn build_components(config: &BotConfig) -> Result<BotComponents> {
    let bot = TelegramBotAdapter::from_token(&config.bot_token, config.telegram_api_url.as_deref())?;
    let backend = build_backend(config)?;
    let handler_chain = build_handler_chain(Arc::new(bot.clone()), backend.clone());

    Ok(BotComponents {
        bot,
        backend,
        handler_chain,
    })
}
