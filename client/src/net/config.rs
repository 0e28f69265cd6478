//! API origin resolution.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use esg_api::DEFAULT_BASE_URL;

/// API base URL baked in at build time via `VERDANCE_API_URL`.
pub fn api_base_url() -> String {
    resolve_base_url(option_env!("VERDANCE_API_URL"))
}

fn resolve_base_url(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_BASE_URL)
        .trim_end_matches('/')
        .to_owned()
}
