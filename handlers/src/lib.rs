//! # Handlers for the Finglish bot
//!
//! This crate provides handler implementations: logging and transliteration.

mod logging;
mod transliteration_handler;

#[cfg(test)]
mod test;

pub use logging::LoggingHandler;
pub use transliteration_handler::TransliterationHandler;
