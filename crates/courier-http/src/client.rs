//! The HTTP client: raw GET/POST plus the JSON-path wrappers

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, Request, Response, Url};
use tracing::debug;

use crate::codec::{Decoder, Encoder, JsonDecoder, JsonEncoder};
use crate::config::HttpConfig;
use crate::error::{HttpError, Result};
use crate::payload::{needs_encoding, Payload};
use crate::response::JsonResponse;
use crate::transport::{Requester, ReqwestTransport};

/// Content type used on the JSON path
const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP client over an injected transport
///
/// `get` and `post` expose the raw request/response cycle; `get_json` and
/// `post_json` layer the JSON encoding decision and deferred parsing on
/// top. The transport and codec capabilities are shared handles, so the
/// client is cheap to clone and safe to share across tasks.
#[derive(Clone)]
pub struct HttpClient {
    transport: Arc<dyn Requester>,
    encoder: Arc<dyn Encoder>,
    decoder: Arc<dyn Decoder>,
    config: HttpConfig,
}

impl HttpClient {
    /// Create a client with the given configuration, the reqwest transport,
    /// and the serde_json codec
    pub fn new(config: HttpConfig) -> Result<Self> {
        Ok(Self {
            transport: Arc::new(ReqwestTransport::new()?),
            encoder: Arc::new(JsonEncoder),
            decoder: Arc::new(JsonDecoder),
            config,
        })
    }

    /// Create a client with default configuration
    pub fn with_defaults() -> Result<Self> {
        Self::new(HttpConfig::default())
    }

    /// Start building a client with substituted capabilities
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::new()
    }

    /// Get configuration
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Execute a GET request
    pub async fn get(&self, url: &str) -> Result<Response> {
        debug!("HTTP GET: {}", url);
        let request = self.new_request(Method::GET, url, None)?;

        self.transport.send(request).await
    }

    /// Execute a POST request with a raw body
    ///
    /// The payload must already be bytes or text; structured payloads are
    /// rejected before any transport call. `content_type` is applied after
    /// default-header replacement, so the argument always wins.
    pub async fn post(&self, url: &str, content_type: &str, payload: Payload) -> Result<Response> {
        let body = payload.into_bytes()?;

        debug!("HTTP POST: {}", url);
        let mut request = self.new_request(Method::POST, url, Some(body))?;
        let content_type = HeaderValue::from_str(content_type)
            .map_err(|e| HttpError::InvalidHeader(e.to_string()))?;
        request.headers_mut().insert(CONTENT_TYPE, content_type);

        self.transport.send(request).await
    }

    /// Execute a GET request, deferring any failure into the returned wrapper
    pub async fn get_json(&self, url: &str) -> JsonResponse {
        JsonResponse::from_result(self.get(url).await, Arc::clone(&self.decoder))
    }

    /// Execute a JSON POST, encoding the payload when its shape requires it
    ///
    /// Encoding failures are captured in the returned wrapper and make no
    /// transport call. Payloads that need no encoding pass through to
    /// `post` unchanged.
    pub async fn post_json(&self, url: &str, payload: Payload) -> JsonResponse {
        let payload = match payload {
            payload if needs_encoding(&payload) => {
                let Payload::Structured(value) = payload else {
                    // the classifier selects structured payloads only
                    return JsonResponse::failed(
                        HttpError::UnsupportedPayload,
                        Arc::clone(&self.decoder),
                    );
                };

                match self.encoder.marshal(&value) {
                    Ok(bytes) => Payload::Bytes(bytes),
                    Err(err) => return JsonResponse::failed(err, Arc::clone(&self.decoder)),
                }
            }
            payload => payload,
        };

        let result = self.post(url, JSON_CONTENT_TYPE, payload).await;

        JsonResponse::from_result(result, Arc::clone(&self.decoder))
    }

    /// Build a transport-ready request
    ///
    /// Absolute URLs (scheme prefix) are used verbatim; anything else is
    /// concatenated onto the configured base URL with no separator
    /// normalization. Configured default headers replace the request's
    /// header map wholesale.
    fn new_request(&self, method: Method, url: &str, body: Option<Vec<u8>>) -> Result<Request> {
        let url = if url.starts_with("http") {
            url.parse::<Url>()?
        } else {
            format!("{}{}", self.config.base_url, url).parse::<Url>()?
        };

        let mut request = Request::new(method, url);

        if let Some(headers) = &self.config.default_headers {
            *request.headers_mut() = headers.clone();
        }

        if let Some(body) = body {
            *request.body_mut() = Some(body.into());
        }

        Ok(request)
    }
}

/// Builder for substituting the transport and codec capabilities
///
/// `HttpClient::new` covers the common case; the builder exists for tests
/// and callers bringing their own transport or codec.
#[derive(Default)]
pub struct HttpClientBuilder {
    config: HttpConfig,
    transport: Option<Arc<dyn Requester>>,
    encoder: Option<Arc<dyn Encoder>>,
    decoder: Option<Arc<dyn Decoder>>,
}

impl HttpClientBuilder {
    /// Create a builder with zero-value configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration record
    pub fn config(mut self, config: HttpConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the base URL
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Set the default header set (full replacement, not a merge)
    pub fn default_headers(mut self, headers: HeaderMap) -> Self {
        self.config.default_headers = Some(headers);
        self
    }

    /// Substitute the transport capability
    pub fn transport(mut self, transport: Arc<dyn Requester>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Substitute the encoder capability
    pub fn encoder(mut self, encoder: Arc<dyn Encoder>) -> Self {
        self.encoder = Some(encoder);
        self
    }

    /// Substitute the decoder capability
    pub fn decoder(mut self, decoder: Arc<dyn Decoder>) -> Self {
        self.decoder = Some(decoder);
        self
    }

    /// Build the client, creating the default transport when none was given
    pub fn build(self) -> Result<HttpClient> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new()?),
        };

        Ok(HttpClient {
            transport,
            encoder: self.encoder.unwrap_or_else(|| Arc::new(JsonEncoder)),
            decoder: self.decoder.unwrap_or_else(|| Arc::new(JsonDecoder)),
            config: self.config,
        })
    }
}
