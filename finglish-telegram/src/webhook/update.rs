//! Inbound webhook payload: the subset of a Telegram `Update` the bot reads.
//!
//! Missing fields fall back to defaults so partial payloads still decode; the only hard
//! rejection is an `update_id` of 0, which means nothing usable was decoded.

use chrono::{DateTime, Utc};
use finglish_core::{Chat, Message, ToCoreMessage, ToCoreUser, User};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebhookError {
    #[error("could not decode incoming update: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid update id of 0 indicates failure to parse incoming update")]
    InvalidUpdateId,
}

/// Received every time a user interacts with the bot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookUpdate {
    #[serde(default)]
    pub update_id: i64,
    /// Absent for updates that are not messages (inline queries, callbacks, ...).
    #[serde(default)]
    pub message: Option<WebhookMessage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookMessage {
    #[serde(default)]
    pub message_id: i64,
    #[serde(default)]
    pub from: Option<WebhookUser>,
    /// Unix time.
    #[serde(default)]
    pub date: i64,
    #[serde(default)]
    pub chat: WebhookChat,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub audio: Option<Audio>,
    #[serde(default)]
    pub voice: Option<Voice>,
    #[serde(default)]
    pub document: Option<Document>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookUser {
    pub id: i64,
    #[serde(default)]
    pub is_bot: bool,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

/// The conversation a message belongs to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookChat {
    pub id: i64,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Audio {
    pub file_id: String,
    #[serde(default)]
    pub duration: u32,
}

/// Voice notes carry the same attributes the bot cares about as audio.
pub type Voice = Audio;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    pub file_id: String,
    #[serde(default)]
    pub file_name: Option<String>,
}

/// Decodes a webhook body. Rejects undecodable JSON and `update_id == 0`.
pub fn parse_update(body: &[u8]) -> Result<WebhookUpdate, WebhookError> {
    let update: WebhookUpdate = serde_json::from_slice(body)?;
    if update.update_id == 0 {
        return Err(WebhookError::InvalidUpdateId);
    }
    Ok(update)
}

impl WebhookMessage {
    /// "text", "voice", "audio", "document" or "other".
    pub fn kind(&self) -> &'static str {
        if self.text.is_some() {
            "text"
        } else if self.voice.is_some() {
            "voice"
        } else if self.audio.is_some() {
            "audio"
        } else if self.document.is_some() {
            "document"
        } else {
            "other"
        }
    }
}

impl ToCoreUser for WebhookUser {
    fn to_core(&self) -> User {
        User {
            id: self.id,
            username: self.username.clone(),
            first_name: Some(self.first_name.clone()),
            last_name: self.last_name.clone(),
        }
    }
}

impl ToCoreMessage for WebhookMessage {
    fn to_core(&self) -> Message {
        Message {
            id: self.message_id.to_string(),
            user: self.from.as_ref().map(|u| u.to_core()).unwrap_or_default(),
            chat: Chat {
                id: self.chat.id,
                chat_type: self.chat.kind.clone(),
            },
            content: self.text.clone().unwrap_or_default(),
            message_type: self.kind().to_string(),
            created_at: DateTime::from_timestamp(self.date, 0).unwrap_or_else(Utc::now),
        }
    }
}
