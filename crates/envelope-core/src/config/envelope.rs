//! Envelope rendering configuration.

use serde::{Deserialize, Serialize};

use crate::types::envelope::{DEFAULT_CODE_KEY, DEFAULT_MESSAGE_KEY, DEFAULT_STATUS_KEY};

/// Field names and locale used when constructing envelopes.
///
/// Empty key names are accepted here but ignored when applied, so the
/// built-in defaults stay in effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvelopeConfig {
    /// Output field holding the status.
    #[serde(default = "default_status_key")]
    pub status_key: String,
    /// Output field holding the message.
    #[serde(default = "default_message_key")]
    pub message_key: String,
    /// Output field holding the code.
    #[serde(default = "default_code_key")]
    pub code_key: String,
    /// Locale used to resolve message texts.
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        Self {
            status_key: default_status_key(),
            message_key: default_message_key(),
            code_key: default_code_key(),
            locale: default_locale(),
        }
    }
}

fn default_status_key() -> String {
    DEFAULT_STATUS_KEY.to_string()
}

fn default_message_key() -> String {
    DEFAULT_MESSAGE_KEY.to_string()
}

fn default_code_key() -> String {
    DEFAULT_CODE_KEY.to_string()
}

fn default_locale() -> String {
    "en".to_string()
}
