//! Application state shared across all handlers.

use std::sync::Arc;

use envelope_core::config::AppConfig;
use envelope_core::traits::{MessageProvider, StaticMessages};
use envelope_core::{AppError, ResponseEnvelope};

use crate::error::ApiError;

/// Application state passed to every handler via `State<AppState>`.
///
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Message texts for the configured locale
    pub messages: Arc<dyn MessageProvider>,
}

impl AppState {
    /// Build state with the message table from `config`.
    pub fn new(config: AppConfig) -> Self {
        let messages = StaticMessages::from_config(&config);
        Self::with_messages(config, Arc::new(messages))
    }

    /// Build state with a custom message provider.
    pub fn with_messages(config: AppConfig, messages: Arc<dyn MessageProvider>) -> Self {
        Self {
            config: Arc::new(config),
            messages,
        }
    }

    /// A fresh envelope using the configured field names and locale.
    pub fn envelope(&self) -> ResponseEnvelope {
        ResponseEnvelope::from_config(&self.config.envelope, self.messages.as_ref())
    }

    /// Wrap `error` so it renders with the configured envelope.
    pub fn fail(&self, error: AppError) -> ApiError {
        ApiError::with_envelope(error, self.envelope())
    }
}
