//! CLI parser, config loading, and the offline `convert` / `rules` commands.

use std::io::Read;

use anyhow::Result;
use clap::{Parser, Subcommand};
use transliterator::{rules, Transliterate};

use crate::config::BotConfig;

#[derive(Parser)]
#[command(name = "finglish-bot")]
#[command(about = "Finglish → Farsi Telegram bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the Telegram webhook (config from env; token can override BOT_TOKEN).
    Serve {
        #[arg(short, long)]
        token: Option<String>,
        /// Overrides WEBHOOK_ADDR.
        #[arg(short, long)]
        addr: Option<String>,
    },
    /// Poll Telegram for updates instead of serving a webhook.
    Poll {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Transliterate TEXT (or stdin) and print the result.
    Convert {
        text: Option<String>,
        /// Keep the input's case; uppercase letters then pass through unchanged.
        #[arg(long)]
        raw: bool,
        /// Use the behnevis API (BEHNEVIS_API_URL or the public endpoint).
        #[arg(long)]
        remote: bool,
    },
    /// Print the rule table.
    Rules,
}

/// Load BotConfig from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}

/// `text`, or all of stdin when `text` is None.
pub fn read_input(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input.trim_end_matches(['\r', '\n']).to_string())
        }
    }
}

/// Converts like the bot does (lower-cased first) unless `raw`. Backend errors are returned.
pub async fn convert_text(input: &str, raw: bool, backend: &dyn Transliterate) -> Result<String> {
    if raw {
        backend.transliterate(input).await
    } else {
        backend.transliterate(&input.to_lowercase()).await
    }
}

/// Rule table as aligned text, digraphs first.
pub fn format_rules() -> String {
    let mut out = format!("{:<6} {}\n", "input", "output");
    out.push_str(&"-".repeat(14));
    out.push('\n');
    for rule in rules() {
        out.push_str(&format!("{:<6} {}\n", rule.input, rule.output));
    }
    out
}
