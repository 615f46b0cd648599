//! Decoding inbound request bodies
//!
//! The server-side counterpart of the client: read a request body stream
//! to completion and decode it as JSON, so handlers share the crate's
//! error vocabulary.

use serde::de::DeserializeOwned;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::error::{HttpError, Result};

/// Read `body` to completion and decode it as JSON
pub async fn read_json<T, R>(mut body: R) -> Result<T>
where
    T: DeserializeOwned,
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::new();
    body.read_to_end(&mut buf)
        .await
        .map_err(|e| HttpError::BodyRead(e.to_string()))?;

    serde_json::from_slice(&buf).map_err(|e| HttpError::Decode(e.to_string()))
}
