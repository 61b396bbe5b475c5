//! Health check handlers.

use axum::extract::State;

use envelope_core::ResponseEnvelope;

use crate::state::AppState;

/// Message key for the health check text.
pub const HEALTHY_MESSAGE_KEY: &str = "message.healthy";

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> ResponseEnvelope {
    let message = state
        .messages
        .get(HEALTHY_MESSAGE_KEY)
        .unwrap_or_else(|| "Service is healthy".to_string());

    let mut envelope = state.envelope();
    envelope
        .set_status_success()
        .set_message(message)
        .set_code("200")
        .set_extra_element("meta.version", env!("CARGO_PKG_VERSION"))
        .set_extra_element("meta.locale", state.config.envelope.locale.as_str());
    envelope
}
