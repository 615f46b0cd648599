//! HTTP request layer error types

use std::sync::Arc;

use thiserror::Error;

/// Result type for HTTP operations
pub type Result<T> = std::result::Result<T, HttpError>;

/// HTTP request layer errors
///
/// Nothing is retried or recovered internally; every failure surfaces as
/// one of these kinds, either immediately (raw calls) or deferred through
/// `JsonResponse` (JSON calls). The enum is `Clone` so a deferred error can
/// be returned from every subsequent `parse` call.
#[derive(Debug, Clone, Error)]
pub enum HttpError {
    /// POST payload was neither raw bytes nor text
    #[error("unsupported payload type for POST request")]
    UnsupportedPayload,

    /// Request URL failed to parse
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Header value rejected at request construction
    #[error("invalid header value: {0}")]
    InvalidHeader(String),

    /// Failed to build the default transport
    #[error("failed to build HTTP transport: {0}")]
    Build(String),

    /// Network request failed
    #[error("network request failed: {0}")]
    Transport(#[source] Arc<reqwest::Error>),

    /// Failed to read a body stream
    #[error("failed to read body: {0}")]
    BodyRead(String),

    /// Encoder capability failed
    #[error("failed to encode request body: {0}")]
    Encode(String),

    /// Decoder capability failed
    #[error("failed to decode JSON body: {0}")]
    Decode(String),
}
