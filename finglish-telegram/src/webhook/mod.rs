//! Webhook mode: Telegram pushes updates to an HTTP endpoint served by this process.

mod server;
mod update;

pub use server::{serve_on, serve_webhook, webhook_router};
pub use update::{
    parse_update, Audio, Document, Voice, WebhookChat, WebhookError, WebhookMessage,
    WebhookUpdate, WebhookUser,
};
