//! Browser implementations of the `esg-api` seams.
//!
//! Client-side (hydrate): `fetch` via `gloo-net`, `localStorage`, and
//! `window.location`.
//! Server-side (SSR): inert stubs, since none of these exist during server
//! rendering and no request is issued before hydration.

#![allow(clippy::unused_async)]

use async_trait::async_trait;
use esg_api::{HttpRequest, HttpResponse, Navigator, TokenStore, Transport, TransportError};

#[cfg(feature = "hydrate")]
use esg_api::AUTH_TOKEN_KEY;

// =============================================================================
// TRANSPORT
// =============================================================================

/// `fetch`-backed transport. The timeout races the request against a timer.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            use futures::future::{Either, select};

            let timeout = request.timeout;
            let fetch = Box::pin(fetch(request));
            let timer = Box::pin(gloo_timers::future::sleep(timeout));
            match select(fetch, timer).await {
                Either::Left((result, _)) => result,
                Either::Right(((), _)) => Err(TransportError::Timeout(timeout)),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(TransportError::Network("not available on server".to_owned()))
        }
    }
}

#[cfg(feature = "hydrate")]
async fn fetch(request: HttpRequest) -> Result<HttpResponse, TransportError> {
    use gloo_net::http::{Method as GlooMethod, RequestBuilder};

    let method = match request.method {
        esg_api::Method::Get => GlooMethod::GET,
        esg_api::Method::Post => GlooMethod::POST,
        esg_api::Method::Put => GlooMethod::PUT,
        esg_api::Method::Delete => GlooMethod::DELETE,
    };
    let mut builder = RequestBuilder::new(&request.url).method(method);
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    let prepared = match request.body {
        Some(body) => builder.body(body),
        None => builder.build(),
    }
    .map_err(|e| TransportError::Network(e.to_string()))?;

    let response = prepared
        .send()
        .await
        .map_err(|e| TransportError::Network(e.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| TransportError::Network(e.to_string()))?;
    Ok(HttpResponse { status, body })
}

// =============================================================================
// TOKEN STORE
// =============================================================================

/// Bearer token persisted under `localStorage["auth_token"]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl TokenStore for LocalStorageTokenStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(AUTH_TOKEN_KEY)
                .ok()
                .flatten()
                .filter(|token| !token.is_empty())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(AUTH_TOKEN_KEY, token);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(AUTH_TOKEN_KEY);
            }
        }
    }
}

// =============================================================================
// NAVIGATOR
// =============================================================================

/// Hard navigation through `window.location`.
///
/// Navigating to the page already shown is skipped, so a rejected login on
/// `/login` keeps its error message instead of reloading the form.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn navigate(&self, path: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let location = window.location();
            if location.pathname().is_ok_and(|current| current == path) {
                return;
            }
            if let Err(e) = location.set_href(path) {
                log::warn!("navigation to {path} failed: {e:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
        }
    }
}
