//! Request/response logging middleware.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;
use tracing::info;

use envelope_core::ResponseStatus;

/// Logs request method, path, HTTP status, envelope status, and duration.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();
    let envelope_status = response
        .extensions()
        .get::<ResponseStatus>()
        .map_or("-", ResponseStatus::as_str);

    info!(
        method = %method,
        path = %uri.path(),
        status = %status.as_u16(),
        envelope_status = %envelope_status,
        duration_ms = %duration.as_millis(),
        "HTTP request"
    );

    response
}
