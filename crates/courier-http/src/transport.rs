//! The transport capability and its reqwest-backed default

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Request, Response};

use crate::error::{HttpError, Result};

/// The single round-trip capability the client needs from a transport
///
/// Implementations own connection handling, timeouts, and redirects; the
/// client adds nothing on top. Implementations must be safe to share
/// across tasks.
#[async_trait]
pub trait Requester: Send + Sync {
    /// Execute `request`, returning the raw response
    async fn send(&self, request: Request) -> Result<Response>;
}

/// Production transport wrapping a `reqwest::Client`
pub struct ReqwestTransport {
    inner: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with reqwest's default client settings
    pub fn new() -> Result<Self> {
        let inner = reqwest::Client::builder()
            .build()
            .map_err(|e| HttpError::Build(e.to_string()))?;

        Ok(Self { inner })
    }

    /// Wrap an existing `reqwest::Client`
    pub fn from_client(inner: reqwest::Client) -> Self {
        Self { inner }
    }

    /// Get the underlying reqwest client (for advanced usage)
    pub fn inner(&self) -> &reqwest::Client {
        &self.inner
    }
}

#[async_trait]
impl Requester for ReqwestTransport {
    async fn send(&self, request: Request) -> Result<Response> {
        self.inner
            .execute(request)
            .await
            .map_err(|e| HttpError::Transport(Arc::new(e)))
    }
}
