//! JSON codec capabilities
//!
//! `Encoder` and `Decoder` are the two seams between the client and the
//! JSON text format. The defaults are backed by `serde_json`; tests and
//! callers with unusual formats substitute their own.

use serde_json::Value;

use crate::error::{HttpError, Result};

/// Encode a structured value into request body bytes
pub trait Encoder: Send + Sync {
    /// Serialize `value` to bytes
    fn marshal(&self, value: &Value) -> Result<Vec<u8>>;
}

/// Decode response body bytes into a structured value
///
/// Returns `Value` rather than a caller-chosen type so the trait stays
/// dyn-compatible; `JsonResponse::parse` finishes the conversion into the
/// caller's target type.
pub trait Decoder: Send + Sync {
    /// Deserialize `data` into a structured value
    fn unmarshal(&self, data: &[u8]) -> Result<Value>;
}

/// Default `serde_json` encoder
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonEncoder;

impl Encoder for JsonEncoder {
    fn marshal(&self, value: &Value) -> Result<Vec<u8>> {
        serde_json::to_vec(value).map_err(|e| HttpError::Encode(e.to_string()))
    }
}

/// Default `serde_json` decoder
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonDecoder;

impl Decoder for JsonDecoder {
    fn unmarshal(&self, data: &[u8]) -> Result<Value> {
        serde_json::from_slice(data).map_err(|e| HttpError::Decode(e.to_string()))
    }
}
