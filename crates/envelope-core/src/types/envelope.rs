//! Standard response envelope.
//!
//! Every API response carries a status, a message and a code under
//! configurable field names, plus any number of extra fields. Extra field
//! keys may be dotted paths (`"meta.pagination.page"`) which are expanded
//! into nested objects when the envelope is rendered.
//!
//! ```
//! use envelope_core::ResponseEnvelope;
//! use serde_json::json;
//!
//! let mut envelope = ResponseEnvelope::new();
//! envelope
//!     .set_status_success()
//!     .set_message("OK")
//!     .set_code("200")
//!     .set_extra_element("meta.count", 3);
//!
//! assert_eq!(
//!     serde_json::Value::Object(envelope.generate_array_response()),
//!     json!({ "status": "success", "message": "OK", "code": "200", "meta": { "count": 3 } })
//! );
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::envelope::EnvelopeConfig;
use crate::result::AppResult;
use crate::traits::messages::{MessageProvider, NO_MESSAGE_KEY, NO_MESSAGE_TEXT};
use crate::types::path::set_path;
use crate::types::status::ResponseStatus;

/// Default output field for the status.
pub const DEFAULT_STATUS_KEY: &str = "status";
/// Default output field for the message.
pub const DEFAULT_MESSAGE_KEY: &str = "message";
/// Default output field for the code.
pub const DEFAULT_CODE_KEY: &str = "code";

/// Fluent builder for a standard response envelope.
///
/// Built fresh for each response, mutated through chained setters and
/// rendered once with [`generate_array_response`](Self::generate_array_response)
/// or [`generate_json_response`](Self::generate_json_response).
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEnvelope {
    status_key: String,
    message_key: String,
    code_key: String,
    status: Option<ResponseStatus>,
    message: Option<String>,
    code: Option<String>,
    extra_elements: Map<String, Value>,
}

impl ResponseEnvelope {
    /// Create an envelope with the built-in English default message.
    pub fn new() -> Self {
        Self::with_default_message(NO_MESSAGE_TEXT.to_string())
    }

    /// Create an envelope whose default message comes from `messages`.
    pub fn with_messages(messages: &dyn MessageProvider) -> Self {
        Self::with_default_message(messages.translate(NO_MESSAGE_KEY))
    }

    /// Create an envelope using the configured field names.
    ///
    /// Key names go through the regular setters, so empty names in the
    /// configuration leave the defaults in place.
    pub fn from_config(config: &EnvelopeConfig, messages: &dyn MessageProvider) -> Self {
        let mut envelope = Self::with_messages(messages);
        envelope
            .set_status_key(config.status_key.as_str())
            .set_message_key(config.message_key.as_str())
            .set_code_key(config.code_key.as_str());
        envelope
    }

    fn with_default_message(message: String) -> Self {
        Self {
            status_key: DEFAULT_STATUS_KEY.to_string(),
            message_key: DEFAULT_MESSAGE_KEY.to_string(),
            code_key: DEFAULT_CODE_KEY.to_string(),
            status: Some(ResponseStatus::None),
            message: Some(message),
            code: None,
            extra_elements: Map::new(),
        }
    }

    // ── Field names ──────────────────────────────────────────

    /// Output field holding the status.
    pub fn status_key(&self) -> &str {
        &self.status_key
    }

    /// Rename the status field. Empty names are ignored.
    pub fn set_status_key(&mut self, key: impl Into<String>) -> &mut Self {
        replace_if_not_empty(&mut self.status_key, key.into());
        self
    }

    /// Output field holding the message.
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    /// Rename the message field. Empty names are ignored.
    pub fn set_message_key(&mut self, key: impl Into<String>) -> &mut Self {
        replace_if_not_empty(&mut self.message_key, key.into());
        self
    }

    /// Output field holding the code.
    pub fn code_key(&self) -> &str {
        &self.code_key
    }

    /// Rename the code field. Empty names are ignored.
    pub fn set_code_key(&mut self, key: impl Into<String>) -> &mut Self {
        replace_if_not_empty(&mut self.code_key, key.into());
        self
    }

    // ── Status ───────────────────────────────────────────────

    /// Current status, `None` once cleared.
    pub fn status(&self) -> Option<&ResponseStatus> {
        self.status.as_ref()
    }

    /// Overwrite the status. Accepts a [`ResponseStatus`] or any string.
    pub fn set_status(&mut self, status: impl Into<ResponseStatus>) -> &mut Self {
        self.status = Some(status.into());
        self
    }

    /// Clear the status; it renders as `null`.
    pub fn clear_status(&mut self) -> &mut Self {
        self.status = None;
        self
    }

    pub fn set_status_error(&mut self) -> &mut Self {
        self.set_status(ResponseStatus::Error)
    }

    pub fn set_status_warning(&mut self) -> &mut Self {
        self.set_status(ResponseStatus::Warning)
    }

    pub fn set_status_info(&mut self) -> &mut Self {
        self.set_status(ResponseStatus::Info)
    }

    pub fn set_status_success(&mut self) -> &mut Self {
        self.set_status(ResponseStatus::Success)
    }

    // ── Message ──────────────────────────────────────────────

    /// Current message, `None` once cleared.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Overwrite the message.
    pub fn set_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.message = Some(message.into());
        self
    }

    /// Clear the message; it renders as `null`.
    pub fn clear_message(&mut self) -> &mut Self {
        self.message = None;
        self
    }

    /// Append `". " + extra` to the current message.
    ///
    /// Does nothing when `extra` is `None`, empty, or `"0"`. A cleared
    /// message is treated as empty text, so the result starts with `". "`.
    pub fn attach_message<'a>(&mut self, extra: impl Into<Option<&'a str>>) -> &mut Self {
        if let Some(extra) = extra.into().filter(|e| !e.is_empty() && *e != "0") {
            let message = self.message.get_or_insert_with(String::new);
            message.push_str(". ");
            message.push_str(extra);
        }
        self
    }

    // ── Code ─────────────────────────────────────────────────

    /// Current code, `None` when unset.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Overwrite the code.
    pub fn set_code(&mut self, code: impl Into<String>) -> &mut Self {
        self.code = Some(code.into());
        self
    }

    /// Clear the code; it renders as `null`.
    pub fn clear_code(&mut self) -> &mut Self {
        self.code = None;
        self
    }

    /// The code as an integer.
    ///
    /// Uses the leading numeric prefix of the code (after optional
    /// whitespace and sign). Anything without one, including a missing
    /// code, yields `0`. Out-of-range values saturate.
    pub fn integer_code(&self) -> i64 {
        self.code.as_deref().map_or(0, leading_integer)
    }

    // ── Extra elements ───────────────────────────────────────

    /// Extra elements in insertion order, keyed by dotted path.
    pub fn extra_elements(&self) -> &Map<String, Value> {
        &self.extra_elements
    }

    /// Store `value` under the dotted path `key`.
    ///
    /// A `null` value (including `None`) is ignored and never removes an
    /// existing entry; use [`remove_extra_element`](Self::remove_extra_element)
    /// for that.
    pub fn set_extra_element(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        let value = value.into();
        if !value.is_null() {
            self.extra_elements.insert(key.into(), value);
        }
        self
    }

    /// Serialize `value` and store it under the dotted path `key`.
    ///
    /// Same `null` rule as [`set_extra_element`](Self::set_extra_element).
    pub fn try_set_extra_element<T: Serialize + ?Sized>(
        &mut self,
        key: impl Into<String>,
        value: &T,
    ) -> AppResult<&mut Self> {
        let value = serde_json::to_value(value)?;
        Ok(self.set_extra_element(key, value))
    }

    /// Remove a previously stored extra element.
    pub fn remove_extra_element(&mut self, key: &str) -> Option<Value> {
        self.extra_elements.shift_remove(key)
    }

    // ── Rendering ────────────────────────────────────────────

    /// Render the envelope into a JSON object.
    ///
    /// The status, message and code fields come first, in that order. Extra
    /// elements are then applied in insertion order with dotted-path
    /// expansion, overwriting whatever is already at their path, including
    /// the three standard fields.
    pub fn generate_array_response(&self) -> Map<String, Value> {
        let mut response = Map::new();
        response.insert(
            self.status_key.clone(),
            self.status
                .as_ref()
                .map_or(Value::Null, |s| Value::String(s.as_str().to_string())),
        );
        response.insert(self.message_key.clone(), optional_string(self.message.as_deref()));
        response.insert(self.code_key.clone(), optional_string(self.code.as_deref()));

        for (key, value) in &self.extra_elements {
            set_path(&mut response, key, value.clone());
        }

        response
    }

    /// Render the envelope as an HTTP `200 OK` JSON response.
    ///
    /// The envelope's code is payload only; it does not affect the
    /// transport status.
    pub fn generate_json_response(&self) -> Response {
        self.generate_json_response_with_status(StatusCode::OK)
    }

    /// Render the envelope as a JSON response with an explicit HTTP status.
    ///
    /// The envelope status, when set, is attached as a response extension
    /// so middleware can observe it without parsing the body.
    pub fn generate_json_response_with_status(&self, status: StatusCode) -> Response {
        let mut response = (status, Json(self.generate_array_response())).into_response();
        if let Some(envelope_status) = &self.status {
            response.extensions_mut().insert(envelope_status.clone());
        }
        response
    }
}

impl Default for ResponseEnvelope {
    fn default() -> Self {
        Self::new()
    }
}

impl IntoResponse for ResponseEnvelope {
    fn into_response(self) -> Response {
        self.generate_json_response()
    }
}

fn replace_if_not_empty(slot: &mut String, value: String) {
    if !value.is_empty() {
        *slot = value;
    }
}

fn optional_string(value: Option<&str>) -> Value {
    value.map_or(Value::Null, |v| Value::String(v.to_string()))
}

/// Integer value of the leading numeric prefix of `raw`, or `0`.
///
/// The prefix is an optionally signed decimal number with an optional
/// fraction and exponent (`"42"`, `"4.9"`, `"1.5e3"`). Plain integers are
/// read exactly; fractional or exponent forms go through `f64` and are
/// truncated. Both saturate at the `i64` bounds.
fn leading_integer(raw: &str) -> i64 {
    let trimmed = raw.trim_start_matches([' ', '\t', '\n', '\r', '\x0b', '\x0c']);
    let bytes = trimmed.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'-' | b'+')));
    let integer_digits = digits_from(end);
    end += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = digits_from(end + 1);
        if integer_digits + fraction_digits > 0 {
            end += 1 + fraction_digits;
        }
    }

    if integer_digits + fraction_digits == 0 {
        return 0;
    }

    let mut exponent = false;
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'-' | b'+')));
        let exponent_digits = digits_from(end + 1 + sign);
        if exponent_digits > 0 {
            end += 1 + sign + exponent_digits;
            exponent = true;
        }
    }

    let number = &trimmed[..end];
    if fraction_digits == 0 && !exponent {
        return saturating_integer(number);
    }

    // `as` truncates toward zero and saturates; NaN cannot occur here.
    number.parse::<f64>().map_or(0, |value| value as i64)
}

fn saturating_integer(number: &str) -> i64 {
    let negative = number.starts_with('-');
    number
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0i64, |acc, b| {
            let digit = i64::from(b - b'0');
            if negative {
                acc.saturating_mul(10).saturating_sub(digit)
            } else {
                acc.saturating_mul(10).saturating_add(digit)
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::messages::StaticMessages;
    use serde_json::json;

    fn render(envelope: &ResponseEnvelope) -> Value {
        Value::Object(envelope.generate_array_response())
    }

    #[test]
    fn test_defaults_after_construction() {
        let envelope = ResponseEnvelope::new();
        assert_eq!(envelope.status_key(), "status");
        assert_eq!(envelope.message_key(), "message");
        assert_eq!(envelope.code_key(), "code");
        assert_eq!(envelope.status(), Some(&ResponseStatus::None));
        assert_eq!(envelope.message(), Some(NO_MESSAGE_TEXT));
        assert_eq!(envelope.code(), None);
        assert!(envelope.extra_elements().is_empty());
    }

    #[test]
    fn test_default_message_from_provider() {
        let messages = StaticMessages::new("de").with_entry(NO_MESSAGE_KEY, "Keine Nachricht");
        let envelope = ResponseEnvelope::with_messages(&messages);
        assert_eq!(envelope.message(), Some("Keine Nachricht"));
    }

    #[test]
    fn test_empty_key_names_are_ignored() {
        let mut envelope = ResponseEnvelope::new();
        envelope.set_status_key("state").set_status_key("");
        envelope.set_message_key("");
        envelope.set_code_key(String::new());

        assert_eq!(envelope.status_key(), "state");
        assert_eq!(envelope.message_key(), "message");
        assert_eq!(envelope.code_key(), "code");
    }

    #[test]
    fn test_from_config_applies_key_names() {
        let config = EnvelopeConfig {
            status_key: "result".to_string(),
            message_key: String::new(),
            code_key: "error_code".to_string(),
            locale: "en".to_string(),
        };
        let envelope = ResponseEnvelope::from_config(&config, &StaticMessages::english());

        assert_eq!(envelope.status_key(), "result");
        assert_eq!(envelope.message_key(), "message");
        assert_eq!(envelope.code_key(), "error_code");
    }

    #[test]
    fn test_status_shortcuts() {
        let mut envelope = ResponseEnvelope::new();
        assert_eq!(envelope.set_status_error().status(), Some(&ResponseStatus::Error));
        assert_eq!(envelope.set_status_warning().status(), Some(&ResponseStatus::Warning));
        assert_eq!(envelope.set_status_info().status(), Some(&ResponseStatus::Info));
        assert_eq!(envelope.set_status_success().status(), Some(&ResponseStatus::Success));

        envelope.set_status("pending");
        assert_eq!(
            envelope.status(),
            Some(&ResponseStatus::Custom("pending".to_string()))
        );
    }

    #[test]
    fn test_cleared_fields_render_null() {
        let mut envelope = ResponseEnvelope::new();
        envelope.clear_status().clear_message().clear_code();
        assert_eq!(
            render(&envelope),
            json!({ "status": null, "message": null, "code": null })
        );
    }

    #[test]
    fn test_attach_message() {
        let mut envelope = ResponseEnvelope::new();
        envelope.set_message("m");

        envelope.attach_message("");
        assert_eq!(envelope.message(), Some("m"));

        envelope.attach_message(None::<&str>);
        assert_eq!(envelope.message(), Some("m"));

        envelope.attach_message("0");
        assert_eq!(envelope.message(), Some("m"));

        envelope.attach_message("extra");
        assert_eq!(envelope.message(), Some("m. extra"));
    }

    #[test]
    fn test_attach_message_to_cleared_message() {
        let mut envelope = ResponseEnvelope::new();
        envelope.clear_message().attach_message("extra");
        assert_eq!(envelope.message(), Some(". extra"));
    }

    #[test]
    fn test_integer_code() {
        let mut envelope = ResponseEnvelope::new();
        assert_eq!(envelope.integer_code(), 0);

        assert_eq!(envelope.set_code("42abc").integer_code(), 42);
        assert_eq!(envelope.set_code("abc").integer_code(), 0);
        assert_eq!(envelope.set_code("  -17").integer_code(), -17);
        assert_eq!(envelope.set_code("+8").integer_code(), 8);
        assert_eq!(envelope.set_code("4.9").integer_code(), 4);
        assert_eq!(envelope.set_code("").integer_code(), 0);
        assert_eq!(envelope.set_code("1e3").integer_code(), 1000);
        assert_eq!(envelope.set_code("1.5e3").integer_code(), 1500);
        assert_eq!(envelope.set_code("1e").integer_code(), 1);
        assert_eq!(envelope.set_code("2E-1x").integer_code(), 0);
        assert_eq!(envelope.set_code("-2.5e1").integer_code(), -25);
        assert_eq!(envelope.set_code(".5e1").integer_code(), 5);
        assert_eq!(envelope.set_code("7.").integer_code(), 7);
        assert_eq!(envelope.set_code("-").integer_code(), 0);
        assert_eq!(envelope.set_code("1e400").integer_code(), i64::MAX);
        assert_eq!(
            envelope.set_code("99999999999999999999999").integer_code(),
            i64::MAX
        );
    }

    #[test]
    fn test_null_extra_element_is_not_stored() {
        let mut envelope = ResponseEnvelope::new();
        envelope.set_extra_element("a.b", Value::Null);
        envelope.set_extra_element("a.c", None::<i32>);
        assert!(envelope.extra_elements().is_empty());

        envelope.set_extra_element("a.b", 5);
        envelope.set_extra_element("a.b", Value::Null);
        assert_eq!(envelope.extra_elements()["a.b"], json!(5));
        assert_eq!(render(&envelope)["a"], json!({ "b": 5 }));
    }

    #[test]
    fn test_extra_element_writes_into_array() {
        let mut envelope = ResponseEnvelope::new();
        envelope
            .set_extra_element("data", json!([1, 2]))
            .set_extra_element("data.1", 9);
        assert_eq!(render(&envelope)["data"], json!([1, 9]));
    }

    #[test]
    fn test_cleared_status_has_no_extension() {
        let mut envelope = ResponseEnvelope::new();
        let response = envelope.clear_status().generate_json_response();
        assert!(response.extensions().get::<ResponseStatus>().is_none());
    }

    #[test]
    fn test_remove_extra_element() {
        let mut envelope = ResponseEnvelope::new();
        envelope.set_extra_element("meta.count", 3);
        assert_eq!(envelope.remove_extra_element("meta.count"), Some(json!(3)));
        assert_eq!(envelope.remove_extra_element("meta.count"), None);
        assert!(render(&envelope).get("meta").is_none());
    }

    #[test]
    fn test_try_set_extra_element_serializes() {
        #[derive(Serialize)]
        struct Page {
            page: u32,
            per_page: u32,
        }

        let mut envelope = ResponseEnvelope::new();
        envelope
            .try_set_extra_element("meta.pagination", &Page { page: 2, per_page: 25 })
            .expect("serialize page");
        assert_eq!(
            render(&envelope)["meta"],
            json!({ "pagination": { "page": 2, "per_page": 25 } })
        );
    }

    #[test]
    fn test_end_to_end_array_response() {
        let mut envelope = ResponseEnvelope::new();
        envelope
            .set_status_success()
            .set_message("OK")
            .set_code("200")
            .set_extra_element("meta.count", 3);

        assert_eq!(
            render(&envelope),
            json!({ "status": "success", "message": "OK", "code": "200", "meta": { "count": 3 } })
        );
    }

    #[test]
    fn test_field_order_and_renamed_keys() {
        let mut envelope = ResponseEnvelope::new();
        envelope
            .set_status_key("state")
            .set_code_key("error_code")
            .set_extra_element("data", json!([1, 2]))
            .set_extra_element("meta.page", 1);

        let keys: Vec<String> = envelope.generate_array_response().keys().cloned().collect();
        assert_eq!(keys, vec!["state", "message", "error_code", "data", "meta"]);
    }

    #[test]
    fn test_extra_elements_apply_in_insertion_order() {
        let mut envelope = ResponseEnvelope::new();
        envelope
            .set_extra_element("meta", "flat")
            .set_extra_element("meta.count", 3)
            .set_extra_element("status", "overridden");

        let rendered = render(&envelope);
        assert_eq!(rendered["meta"], json!({ "count": 3 }));
        assert_eq!(rendered["status"], json!("overridden"));
    }

    #[test]
    fn test_colliding_key_names_keep_first_position() {
        let mut envelope = ResponseEnvelope::new();
        envelope
            .set_message_key("status")
            .set_status_success()
            .set_message("OK");

        let rendered = envelope.generate_array_response();
        let keys: Vec<&str> = rendered.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["status", "code"]);
        assert_eq!(rendered["status"], json!("OK"));
    }

    #[tokio::test]
    async fn test_json_response_body() {
        let mut envelope = ResponseEnvelope::new();
        envelope.set_status_error().set_message("Nope").set_code("422");

        let response = envelope.generate_json_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.extensions().get::<ResponseStatus>(),
            Some(&ResponseStatus::Error)
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let body: Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(
            body,
            json!({ "status": "error", "message": "Nope", "code": "422" })
        );
    }
}
