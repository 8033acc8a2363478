//! # Finglish bot application
//!
//! Wires finglish-telegram, handler-chain, handlers and the transliteration backends. Loads
//! config from env and runs either the webhook server or the long-polling REPL.

pub mod cli;
pub mod components;
pub mod config;
pub mod runner;

pub use cli::{convert_text, format_rules, load_config, read_input, Cli, Commands};
pub use components::{build_backend, build_components, build_handler_chain, BotComponents};
pub use config::{BackendKind, BotConfig};
pub use runner::{run_polling, run_webhook};
