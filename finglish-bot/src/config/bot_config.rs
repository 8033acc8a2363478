//! Bot config: Telegram connection, logging, webhook server, transliteration backend. Loaded from env.

use anyhow::Result;
use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

/// Which [`transliterator::Transliterate`] implementation handles messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    /// In-process rule-table engine.
    #[default]
    Local,
    /// Remote behnevis API, falling back to the local engine on failure.
    Behnevis,
}

impl FromStr for BackendKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "behnevis" | "remote" => Ok(Self::Behnevis),
            other => anyhow::bail!("TRANSLITERATOR must be 'local' or 'behnevis', got '{}'", other),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Behnevis => write!(f, "behnevis"),
        }
    }
}

pub const DEFAULT_LOG_FILE: &str = "logs/finglish-bot.log";
pub const DEFAULT_WEBHOOK_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_WEBHOOK_PATH: &str = "/webhook";

#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN or TELEGRAM_BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL; None uses the public Bot API
    pub telegram_api_url: Option<String>,
    /// LOG_FILE
    pub log_file: String,
    /// WEBHOOK_ADDR: socket address the webhook server binds
    pub webhook_addr: String,
    /// WEBHOOK_PATH: route Telegram posts updates to
    pub webhook_path: String,
    /// WEBHOOK_URL: public URL registered with setWebhook at startup, if set
    pub webhook_url: Option<String>,
    /// TRANSLITERATOR
    pub backend: BackendKind,
    /// BEHNEVIS_API_URL; None uses the public endpoint
    pub behnevis_api_url: Option<String>,
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = token
            .or_else(|| non_empty_var("BOT_TOKEN"))
            .or_else(|| non_empty_var("TELEGRAM_BOT_TOKEN"))
            .ok_or_else(|| anyhow::anyhow!("BOT_TOKEN (or TELEGRAM_BOT_TOKEN) not set"))?;
        let telegram_api_url =
            non_empty_var("TELEGRAM_API_URL").or_else(|| non_empty_var("TELOXIDE_API_URL"));
        let log_file = non_empty_var("LOG_FILE").unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());
        let webhook_addr =
            non_empty_var("WEBHOOK_ADDR").unwrap_or_else(|| DEFAULT_WEBHOOK_ADDR.to_string());
        let webhook_path =
            non_empty_var("WEBHOOK_PATH").unwrap_or_else(|| DEFAULT_WEBHOOK_PATH.to_string());
        let webhook_url = non_empty_var("WEBHOOK_URL");
        let backend = match non_empty_var("TRANSLITERATOR") {
            Some(s) => s.parse()?,
            None => BackendKind::default(),
        };
        let behnevis_api_url = non_empty_var("BEHNEVIS_API_URL");

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
            webhook_addr,
            webhook_path,
            webhook_url,
            backend,
            behnevis_api_url,
        })
    }

    /// Config with the given token and defaults for everything else; no env access.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            log_file: DEFAULT_LOG_FILE.to_string(),
            webhook_addr: DEFAULT_WEBHOOK_ADDR.to_string(),
            webhook_path: DEFAULT_WEBHOOK_PATH.to_string(),
            webhook_url: None,
            backend: BackendKind::Local,
            behnevis_api_url: None,
        }
    }

    /// Parsed WEBHOOK_ADDR.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.webhook_addr.parse().map_err(|e| {
            anyhow::anyhow!("WEBHOOK_ADDR is not a valid socket address ({}): {}", self.webhook_addr, e)
        })
    }

    /// Validate config: URLs parse, address parses, path is routable.
    pub fn validate(&self) -> Result<()> {
        let urls = [
            ("TELEGRAM_API_URL (or TELOXIDE_API_URL)", &self.telegram_api_url),
            ("WEBHOOK_URL", &self.webhook_url),
            ("BEHNEVIS_API_URL", &self.behnevis_api_url),
        ];
        for (name, url) in urls {
            if let Some(url_str) = url {
                if reqwest::Url::parse(url_str).is_err() {
                    anyhow::bail!("{} is set but not a valid URL: {}", name, url_str);
                }
            }
        }

        self.socket_addr()?;

        if !self.webhook_path.starts_with('/') {
            anyhow::bail!("WEBHOOK_PATH must start with '/': {}", self.webhook_path);
        }
        if self.webhook_path == "/health" {
            anyhow::bail!("WEBHOOK_PATH cannot be /health (reserved for the health check)");
        }
        if self.webhook_path.contains(['{', '}'])
            || self
                .webhook_path
                .split('/')
                .any(|segment| segment.starts_with(':') || segment.starts_with('*'))
        {
            anyhow::bail!(
                "WEBHOOK_PATH must be a literal path without ':', '*' or '{{}}' captures: {}",
                self.webhook_path
            );
        }
        Ok(())
    }
}
