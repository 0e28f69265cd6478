//! HTTP client wrapper: base URL, bearer injection, and the 401 policy.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every service call funnels through [`ApiClient::execute`]. It attaches the
//! stored token, applies the fixed timeout, and turns non-2xx responses into
//! [`ApiError::Status`]. There is no retry, backoff, or queueing.
//!
//! SESSION EXPIRY
//! ==============
//! A 401 clears the token and forces one navigation to the login route. The
//! guard is a single latch shared by all in-flight requests, so concurrent
//! 401s produce exactly one clear+navigate. Storing a new token re-arms it.
//! A 401 for a request sent with a token that has since been replaced does
//! not touch the newer session.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::navigation::{LOGIN_ROUTE, Navigator};
use crate::storage::TokenStore;
use crate::transport::{HttpRequest, HttpResponse, Method, Transport};

/// Backend origin used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Fixed per-request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

enum Body {
    Empty,
    Json(String),
    Form(String),
}

struct Inner {
    base_url: String,
    transport: Arc<dyn Transport>,
    tokens: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
    invalidated: AtomicBool,
}

/// Cheaply cloneable handle to the platform API.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url)
            .field("authenticated", &self.inner.tokens.get().is_some())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    #[must_use]
    pub fn new(
        base_url: &str,
        transport: Arc<dyn Transport>,
        tokens: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                base_url: base_url.trim().trim_end_matches('/').to_owned(),
                transport,
                tokens,
                navigator,
                invalidated: AtomicBool::new(false),
            }),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Currently stored bearer token.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.inner.tokens.get()
    }

    /// Persist a freshly issued token and re-arm the expiry latch.
    pub fn store_token(&self, token: &str) {
        self.inner.tokens.set(token);
        self.inner.invalidated.store(false, Ordering::SeqCst);
    }

    /// Drop the stored token without navigating.
    pub fn clear_token(&self) {
        self.inner.tokens.clear();
    }

    pub fn navigate(&self, path: &str) {
        self.inner.navigator.navigate(path);
    }

    /// Clear the token and send the user to the login route, unless a 401
    /// already did so for this session. Returns whether navigation happened.
    pub fn end_session(&self) -> bool {
        self.inner.tokens.clear();
        if self.inner.invalidated.swap(true, Ordering::SeqCst) {
            return false;
        }
        self.inner.navigator.navigate(LOGIN_ROUTE);
        true
    }

    fn expire_session(&self, sent_token: Option<&str>) {
        if self.inner.tokens.get().as_deref() != sent_token {
            log::debug!("ignoring 401 for a superseded token");
            return;
        }
        if self.end_session() {
            log::warn!("session expired; redirecting to {LOGIN_ROUTE}");
        }
    }

    // -------------------------------------------------------------------------
    // Request helpers
    // -------------------------------------------------------------------------

    /// `GET path?query`, decoding the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-2xx status, or decode failure.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T, ApiError> {
        let response = self.execute(Method::Get, path, query, Body::Empty).await?;
        decode(&response)
    }

    /// `POST path` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on encode, transport, status, or decode failure.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.execute(Method::Post, path, &[], json_body(body)?).await?;
        decode(&response)
    }

    /// `POST path` with an `application/x-www-form-urlencoded` body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or decode failure.
    pub async fn post_form<T: DeserializeOwned>(&self, path: &str, fields: &[(&str, &str)]) -> Result<T, ApiError> {
        let encoded = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(fields.iter())
            .finish();
        let response = self.execute(Method::Post, path, &[], Body::Form(encoded)).await?;
        decode(&response)
    }

    /// `POST path` without a body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or decode failure.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute(Method::Post, path, &[], Body::Empty).await?;
        decode(&response)
    }

    /// `PUT path` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on encode, transport, status, or decode failure.
    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.execute(Method::Put, path, &[], json_body(body)?).await?;
        decode(&response)
    }

    /// `DELETE path`, ignoring any response body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or non-2xx status.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::Delete, path, &[], Body::Empty).await?;
        Ok(())
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Body,
    ) -> Result<HttpResponse, ApiError> {
        let url = self.resolve(path, query)?;
        let mut headers = vec![("Accept".to_owned(), "application/json".to_owned())];
        let body = match body {
            Body::Empty => None,
            Body::Json(raw) => {
                headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
                Some(raw)
            }
            Body::Form(raw) => {
                headers.push(("Content-Type".to_owned(), "application/x-www-form-urlencoded".to_owned()));
                Some(raw)
            }
        };
        let sent_token = self.inner.tokens.get();
        if let Some(token) = &sent_token {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }

        log::debug!("{} {url}", method.as_str());
        let request = HttpRequest { method, url, headers, body, timeout: REQUEST_TIMEOUT };
        let response = self.inner.transport.send(request).await?;

        if response.status == 401 {
            self.expire_session(sent_token.as_deref());
        }
        if !response.is_success() {
            return Err(ApiError::from_status(response.status, &response.body));
        }
        Ok(response)
    }

    fn resolve(&self, path: &str, query: &[(&str, String)]) -> Result<String, ApiError> {
        let raw = format!("{}{}", self.inner.base_url, path);
        let mut url = url::Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{raw}: {e}")))?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url.into())
    }
}

fn json_body<B: Serialize + ?Sized>(body: &B) -> Result<Body, ApiError> {
    serde_json::to_string(body)
        .map(Body::Json)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a JSON body; an empty body decodes as `null` so `()` and `Option`
/// targets accept 204 responses.
fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    let raw = if response.body.trim().is_empty() { "null" } else { response.body.as_str() };
    serde_json::from_str(raw).map_err(|e| ApiError::Decode(e.to_string()))
}
