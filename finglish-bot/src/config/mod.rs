//! Bot configuration, loaded from env (after dotenvy).

mod bot_config;


pub use bot_config::{
    BackendKind, BotConfig, DEFAULT_LOG_FILE, DEFAULT_WEBHOOK_ADDR, DEFAULT_WEBHOOK_PATH,
};
