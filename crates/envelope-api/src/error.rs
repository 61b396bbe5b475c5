//! Maps domain `AppError` to enveloped HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use envelope_core::error::{AppError, ErrorKind};
use envelope_core::ResponseEnvelope;

/// Error returned from handlers.
///
/// Renders as an `error` envelope whose code is the HTTP status code.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct ApiError {
    /// The underlying application error.
    #[source]
    pub error: AppError,
    envelope: ResponseEnvelope,
}

impl ApiError {
    /// Wrap an error that renders into `envelope`.
    pub fn with_envelope(error: AppError, envelope: ResponseEnvelope) -> Self {
        Self { error, envelope }
    }

    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        status_for(self.error.kind)
    }
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        Self::with_envelope(error, ResponseEnvelope::new())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self.error, "Server error while handling request");
        }

        let Self { error, mut envelope } = self;
        envelope
            .set_status_error()
            .set_message(error.message)
            .set_code(status.as_u16().to_string());

        envelope.generate_json_response_with_status(status)
    }
}

fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Configuration | ErrorKind::Serialization | ErrorKind::Io => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
