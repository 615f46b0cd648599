//! JSON-aware HTTP request layer for Courier services
//!
//! Provides a narrow, mockable client surface over an injected HTTP
//! transport, with a uniform decision point for when a payload must be
//! JSON-encoded and deferred, cached parsing of JSON responses.
//!
//! ## Features
//!
//! - **Trait-based design**: transport and codec are injected capabilities,
//!   mockable via `Requester`, `Encoder`, and `Decoder`
//! - **Configurable**: base URL and default headers, fixed at construction
//! - **Tagged payloads**: `Payload` decides JSON encoding by shape
//! - **Deferred parsing**: the JSON calls return a `JsonResponse` that
//!   surfaces any failure at `parse` time and caches the body across parses
//! - **Testing support**: easy mocking with wiremock

pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod inbound;
pub mod payload;
pub mod response;
pub mod transport;

pub use client::{HttpClient, HttpClientBuilder};
pub use codec::{Decoder, Encoder, JsonDecoder, JsonEncoder};
pub use config::HttpConfig;
pub use error::{HttpError, Result};
pub use inbound::read_json;
pub use payload::{needs_encoding, Payload};
pub use response::JsonResponse;
pub use transport::{ReqwestTransport, Requester};

/// Re-export commonly used types
pub use reqwest::{header, Method, Response, StatusCode};
