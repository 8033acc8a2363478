//! Integration tests for the assembled bot: config → components → handler chain → Telegram.
//!
//! Telegram (and behnevis, where used) are mockito servers; config is built in code so no env is touched.
//! Teloxide request path format is `/bot<token>/<method>`.

use chrono::Utc;
use finglish_bot::{build_components, BackendKind, BotConfig};
use finglish_core::{Chat, HandlerResponse, Message, User};
use mockito::Matcher;
use serde_json::json;
use transliterator::Transliterate;

const TEST_BOT_TOKEN: &str = "test_bot_token_12345";

fn sent_message_body() -> &'static str {
    r#"{
        "ok": true,
        "result": {
            "message_id": 2,
            "date": 1706529600,
            "chat": {"id": 555, "type": "private"},
            "from": {"id": 123456789, "is_bot": true, "first_name": "FinglishBot", "username": "finglishbot"},
            "text": "ok"
        }
    }"#
}

/// Registers a sendMessage mock expecting `text` for chat 555.
async fn mock_send_message(server: &mut mockito::ServerGuard, text: &str) -> mockito::Mock {
    server
        .mock("POST", format!("/bot{}/sendMessage", TEST_BOT_TOKEN).as_str())
        .match_body(Matcher::PartialJson(json!({ "chat_id": 555, "text": text })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(sent_message_body())
        .create_async()
        .await
}

fn incoming(text: &str) -> Message {
    Message {
        id: "3".to_string(),
        user: User {
            id: 77,
            username: Some("sara".to_string()),
            first_name: Some("Sara".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 555,
            chat_type: "private".to_string(),
        },
        content: text.to_string(),
        message_type: "text".to_string(),
        created_at: Utc::now(),
    }
}

fn config_for(telegram: &mockito::ServerGuard) -> BotConfig {
    let mut config = BotConfig::with_token(TEST_BOT_TOKEN.to_string());
    config.telegram_api_url = Some(telegram.url());
    config
}

/// **Test: Local backend: "Salam Shoma" is lower-cased, transliterated, and sent to the chat.**
#[tokio::test]
async fn local_backend_sends_transliteration() {
    let mut telegram = mockito::Server::new_async().await;
    let send = mock_send_message(&mut telegram, "سالام شوما").await;

    let components = build_components(&config_for(&telegram)).unwrap();
    assert_eq!(components.backend.name(), "local");

    let response = components
        .handler_chain
        .handle(&incoming("Salam Shoma"))
        .await
        .unwrap();

    assert_eq!(response, HandlerResponse::Reply("سالام شوما".to_string()));
    send.assert_async().await;
}

/// **Test: behnevis backend: the remote word map is used for the reply.**
#[tokio::test]
async fn behnevis_backend_sends_remote_transliteration() {
    let mut telegram = mockito::Server::new_async().await;
    let send = mock_send_message(&mut telegram, "سلام خوبی").await;

    let mut behnevis = mockito::Server::new_async().await;
    let convert = behnevis
        .mock("POST", "/convert")
        .match_body("salam khoobi")
        .with_status(200)
        .with_body(r#"{"salam":"سلام","khoobi":"خوبی"}"#)
        .create_async()
        .await;

    let mut config = config_for(&telegram);
    config.backend = BackendKind::Behnevis;
    config.behnevis_api_url = Some(format!("{}/convert", behnevis.url()));

    let components = build_components(&config).unwrap();
    let response = components
        .handler_chain
        .handle(&incoming("Salam Khoobi"))
        .await
        .unwrap();

    assert_eq!(response, HandlerResponse::Reply("سلام خوبی".to_string()));
    convert.assert_async().await;
    send.assert_async().await;
}

/// **Test: behnevis failure falls back to the local engine; the reply is still delivered.**
#[tokio::test]
async fn behnevis_failure_falls_back_to_local() {
    let mut telegram = mockito::Server::new_async().await;
    let send = mock_send_message(&mut telegram, "خووبی").await;

    let mut behnevis = mockito::Server::new_async().await;
    let _convert = behnevis
        .mock("POST", "/convert")
        .with_status(500)
        .create_async()
        .await;

    let mut config = config_for(&telegram);
    config.backend = BackendKind::Behnevis;
    config.behnevis_api_url = Some(format!("{}/convert", behnevis.url()));

    let components = build_components(&config).unwrap();
    let response = components
        .handler_chain
        .handle(&incoming("khoobi"))
        .await
        .unwrap();

    assert_eq!(response, HandlerResponse::Reply("خووبی".to_string()));
    send.assert_async().await;
}

/// **Test: Telegram delivery failure surfaces as a chain error.**
#[tokio::test]
async fn delivery_failure_is_a_chain_error() {
    let mut telegram = mockito::Server::new_async().await;
    let _send = telegram
        .mock("POST", format!("/bot{}/sendMessage", TEST_BOT_TOKEN).as_str())
        .with_status(403)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok": false, "error_code": 403, "description": "Forbidden: bot was blocked by the user"}"#)
        .create_async()
        .await;

    let components = build_components(&config_for(&telegram)).unwrap();
    let result = components.handler_chain.handle(&incoming("salam")).await;

    assert!(result.is_err());
}

/// **Test: Invalid Telegram API URL fails component construction.**
#[test]
fn invalid_api_url_fails_build() {
    let mut config = BotConfig::with_token(TEST_BOT_TOKEN.to_string());
    config.telegram_api_url = Some("not a url".to_string());
    assert!(build_components(&config).is_err());
}
