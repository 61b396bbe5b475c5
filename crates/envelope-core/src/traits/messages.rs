//! Message lookup for envelope texts.
//!
//! Envelopes never hard-code human-readable text. The default message is
//! resolved through a [`MessageProvider`] injected at construction time.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::config::AppConfig;

/// Key resolved for the default envelope message.
pub const NO_MESSAGE_KEY: &str = "message.none";

/// Fallback text for [`NO_MESSAGE_KEY`].
pub const NO_MESSAGE_TEXT: &str = "No message";

/// Resolves message keys to localized text.
pub trait MessageProvider: Send + Sync + fmt::Debug + 'static {
    /// Look up a key. Returns `None` when the key is unknown.
    fn get(&self, key: &str) -> Option<String>;

    /// Look up a key, returning the key itself when it is unknown.
    fn translate(&self, key: &str) -> String {
        self.get(key).unwrap_or_else(|| key.to_string())
    }
}

/// In-memory message table for a single locale.
#[derive(Debug, Clone)]
pub struct StaticMessages {
    locale: String,
    entries: HashMap<String, String>,
}

impl StaticMessages {
    /// Create an empty table for `locale`.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            entries: HashMap::new(),
        }
    }

    /// Built-in English texts.
    pub fn english() -> Self {
        Self::new("en").with_entry(NO_MESSAGE_KEY, NO_MESSAGE_TEXT)
    }

    /// Build the table for the configured locale.
    ///
    /// Starts from the built-in English texts and overlays the
    /// `[messages.<locale>]` table. Nested tables are flattened into dotted
    /// keys.
    pub fn from_config(config: &AppConfig) -> Self {
        let locale = config.envelope.locale.clone();
        let mut messages = Self::english();
        messages.locale = locale.clone();

        match config.messages.get(&locale) {
            Some(table) => {
                let before = messages.entries.len();
                flatten_into(&mut messages.entries, String::new(), table);
                tracing::debug!(
                    locale = %locale,
                    loaded = messages.entries.len().saturating_sub(before),
                    "Loaded message table"
                );
            }
            None => {
                tracing::debug!(locale = %locale, "No message table for locale, using built-in texts");
            }
        }

        messages
    }

    /// Add or replace a single entry.
    pub fn with_entry(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.entries.insert(key.into(), text.into());
        self
    }

    /// Locale this table serves.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for StaticMessages {
    fn default() -> Self {
        Self::english()
    }
}

impl MessageProvider for StaticMessages {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

fn flatten_into(entries: &mut HashMap<String, String>, prefix: String, value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(entries, path, child);
            }
        }
        Value::String(text) if !prefix.is_empty() => {
            entries.insert(prefix, text.clone());
        }
        Value::Null => {}
        other if !prefix.is_empty() => {
            entries.insert(prefix, other.to_string());
        }
        _ => {}
    }
}
