//! Build-time client configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// API origin used when `WORKOUT_API_BASE_URL` is unset at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Base URL of the workout API, baked in at compile time.
pub fn api_base_url() -> &'static str {
    resolve_base_url(option_env!("WORKOUT_API_BASE_URL"))
}

fn resolve_base_url(configured: Option<&'static str>) -> &'static str {
    configured
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
}
