//! Deferred, cached JSON response parsing

use std::sync::Arc;

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::codec::Decoder;
use crate::error::{HttpError, Result};

/// A JSON response whose parsing is deferred until `parse`
///
/// Produced by `HttpClient::get_json` and `post_json`. Any failure along
/// the way — encoding, request construction, the network call, reading or
/// decoding the body — surfaces from `parse`, so callers follow a single
/// call-then-parse pattern regardless of where a failure happened.
///
/// The body is read from the transport at most once; the bytes are cached
/// and reused by later `parse` calls.
pub struct JsonResponse {
    status: Option<StatusCode>,
    response: Option<Response>,
    body: Option<Vec<u8>>,
    err: Option<HttpError>,
    decoder: Arc<dyn Decoder>,
}

impl JsonResponse {
    /// Wrap the outcome of a transport call
    pub(crate) fn from_result(result: Result<Response>, decoder: Arc<dyn Decoder>) -> Self {
        match result {
            Ok(response) => Self {
                status: Some(response.status()),
                response: Some(response),
                body: None,
                err: None,
                decoder,
            },
            Err(err) => Self::failed(err, decoder),
        }
    }

    /// Wrap a failure captured before any transport call was made
    pub(crate) fn failed(err: HttpError, decoder: Arc<dyn Decoder>) -> Self {
        Self {
            status: None,
            response: None,
            body: None,
            err: Some(err),
            decoder,
        }
    }

    /// Status code of the underlying response, when one was received
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// The deferred error, when the call failed before parsing
    pub fn error(&self) -> Option<&HttpError> {
        self.err.as_ref()
    }

    /// The raw response, until the first `parse` consumes its body
    pub fn response(&self) -> Option<&Response> {
        self.response.as_ref()
    }

    /// Decode the response body into `T`
    ///
    /// A deferred error is returned as-is and the body is never touched.
    /// Otherwise the body is read once, cached, and decoded through the
    /// decoder capability; calling `parse` again with a different target
    /// type reuses the cached bytes.
    pub async fn parse<T: DeserializeOwned>(&mut self) -> Result<T> {
        if let Some(err) = &self.err {
            return Err(err.clone());
        }

        if self.body.is_none() {
            let bytes = match self.response.take() {
                Some(response) => response.bytes().await.map_err(|e| {
                    let err = HttpError::BodyRead(e.to_string());
                    self.err = Some(err.clone());
                    err
                })?,
                // constructors capture either a response or an error
                None => {
                    let err = HttpError::BodyRead("response body already consumed".to_string());
                    self.err = Some(err.clone());
                    return Err(err);
                }
            };
            self.body = Some(bytes.to_vec());
        }

        let body = self.body.as_deref().unwrap_or_default();
        let value = self.decoder.unmarshal(body)?;
        serde_json::from_value(value).map_err(|e| HttpError::Decode(e.to_string()))
    }
}
