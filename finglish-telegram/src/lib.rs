//! # finglish-telegram
//!
//! Telegram layer: webhook receiver, long-polling runner, adapters to core types, and the
//! [`finglish_core::Bot`] implementation. Handles only Telegram connectivity and handler-chain
//! execution; transliteration lives in the handlers.

mod adapters;
mod bot_adapter;
mod runner;
pub mod webhook;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use runner::run_repl;
pub use webhook::{parse_update, serve_on, serve_webhook, webhook_router, WebhookError, WebhookUpdate};
