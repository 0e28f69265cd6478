//! Bearer-token storage seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is the only durable client state. Every read and write goes
//! through [`TokenStore`] so the browser (`localStorage`), the CLI, and tests
//! can each supply their own backing without touching the HTTP client.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::sync::RwLock;

/// Storage key for the bearer token in browser `localStorage`.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Holder of the single bearer token.
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Process-memory token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with an existing token, e.g. from `--token`.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: RwLock::new(Some(token.into())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.read().map_or(None, |guard| guard.clone())
    }

    fn set(&self, token: &str) {
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token.to_owned());
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
    }
}
