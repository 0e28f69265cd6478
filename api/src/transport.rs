//! Transport seam between [`crate::ApiClient`] and an HTTP stack.
//!
//! ARCHITECTURE
//! ============
//! `ApiClient` builds fully-resolved requests (URL with query, headers, encoded
//! body) and hands them to a [`Transport`]. The browser uses `gloo-net`, the
//! CLI uses `reqwest`, and tests replay canned responses. Futures are not
//! `Send` because browser fetch futures are not.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::TransportError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A request ready to put on the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute URL including the encoded query string.
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// Encoded body; its content type is in `headers`.
    pub body: Option<String>,
    pub timeout: Duration,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and raw body of a completed exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    /// Send one request. Implementations must honor `request.timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when no HTTP status was obtained.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
