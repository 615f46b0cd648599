//! Request payloads and the content-shape classifier

use serde::Serialize;
use serde_json::Value;

use crate::error::{HttpError, Result};

/// A POST request payload, tagged by shape
///
/// `Bytes` and `Text` are sent as-is; `Structured` values go through the
/// JSON encoder when the classifier marks them as needing encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Pre-serialized or binary body, never JSON-encoded
    Bytes(Vec<u8>),
    /// Text body, sent verbatim
    Text(String),
    /// Structured value, JSON-encoded when it is an array or an object
    Structured(Value),
}

impl Payload {
    /// Build a structured payload from any serializable value
    ///
    /// One level of reference is fine: `Payload::json(&value)` and
    /// `Payload::json(&&value)` classify the same way.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        serde_json::to_value(value)
            .map(Payload::Structured)
            .map_err(|e| HttpError::Encode(e.to_string()))
    }

    /// Extract the raw body bytes for a POST call
    ///
    /// Structured payloads are rejected here: they must go through the
    /// encoder first (see `HttpClient::post_json`).
    pub(crate) fn into_bytes(self) -> Result<Vec<u8>> {
        match self {
            Payload::Bytes(bytes) => Ok(bytes),
            Payload::Text(text) => Ok(text.into_bytes()),
            Payload::Structured(_) => Err(HttpError::UnsupportedPayload),
        }
    }
}

impl From<Vec<u8>> for Payload {
    fn from(value: Vec<u8>) -> Self {
        Payload::Bytes(value)
    }
}

impl From<&[u8]> for Payload {
    fn from(value: &[u8]) -> Self {
        Payload::Bytes(value.to_vec())
    }
}

impl From<String> for Payload {
    fn from(value: String) -> Self {
        Payload::Text(value)
    }
}

impl From<&str> for Payload {
    fn from(value: &str) -> Self {
        Payload::Text(value.to_string())
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Payload::Structured(value)
    }
}

/// Decide whether a payload must be JSON-encoded before sending
///
/// Raw bytes and text pass through untouched. Arrays and objects (maps,
/// structs, sequences) need encoding; scalar values do not.
pub fn needs_encoding(payload: &Payload) -> bool {
    match payload {
        Payload::Bytes(_) | Payload::Text(_) => false,
        Payload::Structured(value) => matches!(value, Value::Array(_) | Value::Object(_)),
    }
}
