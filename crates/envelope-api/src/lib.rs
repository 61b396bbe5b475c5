//! # envelope-api
//!
//! HTTP layer built on Axum. Renders every response, including errors and
//! unknown routes, as a [`ResponseEnvelope`](envelope_core::ResponseEnvelope)
//! configured from the application settings.

pub mod app;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
