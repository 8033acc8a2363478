//! Terminal handler: transliterates the message text and sends the Farsi back to the chat.

use std::sync::Arc;

use async_trait::async_trait;
use finglish_core::{Bot, Handler, HandlerResponse, Message, Result};
use tracing::{debug, error, info, instrument, warn};
use transliterator::{convert, Transliterate};

/// Lower-cases the text, converts it through the configured backend and delivers the result.
///
/// A failing backend falls back to the local engine; a failing delivery is logged and returned
/// as the handler error (no retry).
pub struct TransliterationHandler {
    bot: Arc<dyn Bot>,
    backend: Arc<dyn Transliterate>,
}

impl TransliterationHandler {
    pub fn new(bot: Arc<dyn Bot>, backend: Arc<dyn Transliterate>) -> Self {
        Self { bot, backend }
    }

    /// Farsi for `text`. Rules only cover lowercase letters, so input is lower-cased first.
    pub async fn transliterate(&self, text: &str) -> String {
        let finglish = text.to_lowercase();
        match self.backend.transliterate(&finglish).await {
            Ok(farsi) => farsi,
            Err(e) => {
                warn!(
                    backend = self.backend.name(),
                    error = %e,
                    "Transliteration backend failed, using local engine"
                );
                convert(&finglish)
            }
        }
    }
}

#[async_trait]
impl Handler for TransliterationHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(text) = message.text() else {
            debug!(message_type = %message.message_type, "No text in message, ignoring");
            return Ok(HandlerResponse::Ignore);
        };

        let farsi = self.transliterate(text).await;
        if farsi.trim().is_empty() {
            debug!("Blank transliteration, nothing to send");
            return Ok(HandlerResponse::Ignore);
        }

        info!(text = %farsi, chat_id = message.chat.id, "Sending transliteration");
        if let Err(e) = self.bot.reply_to(message, &farsi).await {
            error!(chat_id = message.chat.id, error = %e, "Failed to deliver transliteration");
            return Err(e);
        }
        info!(chat_id = message.chat.id, "Successfully delivered to chat");

        Ok(HandlerResponse::Reply(farsi))
    }
}
