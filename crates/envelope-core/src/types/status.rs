//! Envelope status values.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Status reported in the envelope.
///
/// The five fixed values cover the usual outcomes. Any other string is
/// carried verbatim as [`ResponseStatus::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ResponseStatus {
    /// No status was set.
    #[default]
    None,
    /// The request failed.
    Error,
    /// The request succeeded with caveats.
    Warning,
    /// Informational outcome.
    Info,
    /// The request succeeded.
    Success,
    /// Caller-defined status.
    Custom(String),
}

impl ResponseStatus {
    /// Wire representation of the status.
    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "none",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Success => "success",
            Self::Custom(value) => value,
        }
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ResponseStatus {
    fn from(value: &str) -> Self {
        match value {
            "none" => Self::None,
            "error" => Self::Error,
            "warning" => Self::Warning,
            "info" => Self::Info,
            "success" => Self::Success,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl From<String> for ResponseStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "none" | "error" | "warning" | "info" | "success" => Self::from(value.as_str()),
            _ => Self::Custom(value),
        }
    }
}

impl FromStr for ResponseStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl Serialize for ResponseStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ResponseStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}
