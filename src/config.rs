//! Build-time client configuration.
//!
//! The API base address is baked in when the WASM bundle is compiled and is
//! fixed for the lifetime of a page load. Set `CHAT_API_BASE_URL` in the
//! build environment to point the client at a different server.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Base address used when `CHAT_API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Base address of the chat API.
pub const API_BASE_URL: &str = match option_env!("CHAT_API_BASE_URL") {
    Some(url) => url,
    None => DEFAULT_API_BASE_URL,
};

/// Pause between a successful login and the switch to the dashboard.
pub const LOGIN_REDIRECT_DELAY: Duration = Duration::from_secs(1);

/// Join a base address and an endpoint path with exactly one `/` between them.
pub fn endpoint(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}
