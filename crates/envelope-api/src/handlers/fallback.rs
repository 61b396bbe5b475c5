//! Handler for unmatched routes.

use axum::extract::State;
use axum::http::{Method, Uri};

use envelope_core::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Any unmatched route: a `404` error envelope.
pub async fn not_found(State(state): State<AppState>, method: Method, uri: Uri) -> ApiError {
    tracing::debug!(method = %method, path = %uri.path(), "No route matched");
    state.fail(AppError::not_found(format!(
        "No route for {} {}",
        method,
        uri.path()
    )))
}
