use anyhow::Result;
use finglish_core::init_tracing;
use finglish_telegram::{run_repl, serve_webhook};
use tracing::{info, instrument};

use crate::components::build_components;
use crate::config::BotConfig;

/// Validates config, initializes logging and builds components. Shared by both run modes.
fn start(config: &BotConfig) -> Result<crate::components::BotComponents> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    info!(
        backend = %config.backend,
        telegram_api_url = ?config.telegram_api_url,
        log_file = %config.log_file,
        "Initializing bot"
    );

    build_components(config)
}

/// Webhook mode: registers WEBHOOK_URL if set, then serves updates until Ctrl-C.
#[instrument(skip(config))]
pub async fn run_webhook(config: BotConfig) -> Result<()> {
    let components = start(&config)?;

    if let Some(url) = &config.webhook_url {
        components.bot.register_webhook(url).await?;
    }

    info!(addr = %config.webhook_addr, path = %config.webhook_path, "Bot started (webhook)");
    serve_webhook(config.socket_addr()?, &config.webhook_path, components.handler_chain).await
}

/// Long-polling mode.
#[instrument(skip(config))]
pub async fn run_polling(config: BotConfig) -> Result<()> {
    let components = start(&config)?;

    info!("Bot started (polling)");
    run_repl(components.bot.inner().clone(), components.handler_chain).await
}
