//! Browser bindings for the `esg-api` client.
//!
//! SYSTEM CONTEXT
//! ==============
//! `browser` implements the transport, token-store and navigation seams on
//! top of `gloo-net` and `web-sys`; `config` resolves the API origin. The
//! app builds exactly one [`Session`] from these and shares it via context.

pub mod browser;
pub mod config;

use std::sync::Arc;

use esg_api::{ApiClient, Session};

use self::browser::{GlooTransport, LocalStorageTokenStore, WindowNavigator};

/// Build the per-tab session over the browser seams.
pub fn browser_session() -> Session {
    let client = ApiClient::new(
        &config::api_base_url(),
        Arc::new(GlooTransport),
        Arc::new(LocalStorageTokenStore),
        Arc::new(WindowNavigator),
    );
    Session::new(client)
}
