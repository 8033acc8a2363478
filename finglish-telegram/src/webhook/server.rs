//! HTTP webhook receiver (axum): `POST <path>` takes Telegram updates, `GET /health` reports status.
//!
//! Each update is decoded, converted to a core [`Message`](finglish_core::Message) and run through
//! the [`HandlerChain`] before the request is answered. Handler failures are logged and still
//! answered with 200 so Telegram does not redeliver the update.

use std::net::SocketAddr;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use finglish_core::ToCoreMessage;
use handler_chain::HandlerChain;
use serde::Serialize;
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

use super::update::parse_update;

#[derive(Clone)]
struct WebhookState {
    chain: HandlerChain,
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    handlers: usize,
}

async fn health(State(state): State<WebhookState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        handlers: state.chain.len(),
    })
}

async fn receive_update(State(state): State<WebhookState>, body: Bytes) -> StatusCode {
    let update = match parse_update(&body) {
        Ok(update) => update,
        Err(e) => {
            warn!(error = %e, body_len = body.len(), "Rejected webhook payload");
            return StatusCode::BAD_REQUEST;
        }
    };

    let Some(message) = update.message.as_ref() else {
        debug!(update_id = update.update_id, "Update without message, ignoring");
        return StatusCode::OK;
    };

    let core_msg = message.to_core();
    info!(
        update_id = update.update_id,
        chat_id = core_msg.chat.id,
        message_type = %core_msg.message_type,
        "Received update"
    );

    match state.chain.handle(&core_msg).await {
        Ok(response) => debug!(update_id = update.update_id, response = ?response, "Update handled"),
        Err(e) => error!(
            update_id = update.update_id,
            chat_id = core_msg.chat.id,
            error = %e,
            "Handler chain failed"
        ),
    }

    StatusCode::OK
}

/// Router with the webhook at `path` and `GET /health`.
pub fn webhook_router(path: &str, chain: HandlerChain) -> Router {
    Router::new()
        .route(path, post(receive_update))
        .route("/health", get(health))
        .with_state(WebhookState { chain })
}

/// Serves the webhook on an already-bound listener until the future is dropped.
pub async fn serve_on(listener: TcpListener, path: &str, chain: HandlerChain) -> anyhow::Result<()> {
    axum::serve(listener, webhook_router(path, chain)).await?;
    Ok(())
}

/// Binds `addr` and serves the webhook until Ctrl-C.
pub async fn serve_webhook(addr: SocketAddr, path: &str, chain: HandlerChain) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, path = %path, "Webhook listening");

    axum::serve(listener, webhook_router(path, chain))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!(error = %e, "Failed to listen for shutdown signal");
            }
            info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}
