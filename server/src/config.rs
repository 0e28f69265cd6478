//! Process configuration read from the environment.
//!
//! `.env` is loaded by `main` before anything here runs. Leptos settings
//! (site root, output name) come from `[package.metadata.leptos]` or the
//! `LEPTOS_*` variables cargo-leptos exports, not from this module.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}")]
    InvalidPort(String),
}

/// Listen port from `PORT`, defaulting to [`DEFAULT_PORT`].
///
/// # Errors
///
/// Returns [`ConfigError::InvalidPort`] when `PORT` is set but not a `u16`.
pub fn port() -> Result<u16, ConfigError> {
    parse_port(std::env::var("PORT").ok().as_deref())
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}
