use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    /// Transport failure talking to the messaging platform.
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BotError>;
