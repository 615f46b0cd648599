//! HTTP client configuration

use reqwest::header::HeaderMap;

/// Default request configuration applied to every call
///
/// Zero values mean "no base URL" and "leave the transport's own header
/// handling alone". The record is fixed once the owning client has been
/// constructed.
#[derive(Debug, Clone, Default)]
pub struct HttpConfig {
    /// Base URL prepended to relative request paths
    pub base_url: String,

    /// Default header set; replaces request headers wholesale when present
    pub default_headers: Option<HeaderMap>,
}

impl HttpConfig {
    /// Create a new config with zero values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL
    ///
    /// Joined with relative paths by plain concatenation: supply the base
    /// without a trailing slash and paths with a leading slash.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the default header set (full replacement, not a merge)
    pub fn with_default_headers(mut self, headers: HeaderMap) -> Self {
        self.default_headers = Some(headers);
        self
    }
}

#[cfg(test)]
mod tests {
    use reqwest::header::{HeaderValue, CONTENT_TYPE};

    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpConfig::default();
        assert!(config.base_url.is_empty());
        assert!(config.default_headers.is_none());
    }

    #[test]
    fn test_with_base_url() {
        let config = HttpConfig::new().with_base_url("http://localhost:11434");
        assert_eq!(config.base_url, "http://localhost:11434");
    }

    #[test]
    fn test_with_default_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let config = HttpConfig::new().with_default_headers(headers.clone());
        assert_eq!(config.default_headers, Some(headers));
    }

    #[test]
    fn test_builder_pattern() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Bearer test_token"));

        let config = HttpConfig::new()
            .with_base_url("http://localhost:8080")
            .with_default_headers(headers.clone());

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.default_headers, Some(headers));
    }
}
