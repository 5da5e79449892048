//! REST API client for the chat server.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests): every request fails with `ApiError::Transport`
//! since there is no browser `fetch` to drive.
//!
//! ERROR HANDLING
//! ==============
//! Status and body interpretation is kept in plain functions over
//! `(status, body)` so the accept/reject rules are testable without a
//! browser. Callers always get a `Result`; nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;

use super::error::ApiError;
use super::types::{ApiReply, Credentials, HealthStatus, LogoutRequest, SendMessageRequest};
use crate::config;

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const LOGOUT_PATH: &str = "/auth/logout";
pub const SEND_PATH: &str = "/chat/send";
pub const HEALTH_PATH: &str = "/health";

/// Operations the flows need from the chat server.
///
/// `HttpApi` is the browser implementation; tests substitute a recording fake.
#[allow(async_fn_in_trait)]
pub trait ChatApi {
    /// `POST /auth/login`.
    async fn login(&self, credentials: &Credentials) -> Result<ApiReply, ApiError>;

    /// `POST /auth/register`.
    async fn register(&self, credentials: &Credentials) -> Result<ApiReply, ApiError>;

    /// `POST /chat/send`. Only the outcome matters; the body is not returned.
    async fn send_message(&self, request: &SendMessageRequest) -> Result<(), ApiError>;

    /// `POST /auth/logout`.
    async fn logout(&self, request: &LogoutRequest) -> Result<(), ApiError>;

    /// `GET /health`.
    async fn health(&self) -> Result<HealthStatus, ApiError>;
}

/// HTTP implementation of [`ChatApi`] bound to one base address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpApi {
    base_url: String,
}

impl Default for HttpApi {
    fn default() -> Self {
        Self::new(config::API_BASE_URL)
    }
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Absolute URL for an endpoint path.
    pub fn url(&self, path: &str) -> String {
        config::endpoint(&self.base_url, path)
    }

    #[cfg(feature = "csr")]
    async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> Result<(u16, String), ApiError> {
        let resp = gloo_net::http::Request::post(&self.url(path))
            .json(body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        let status = resp.status();
        let text = resp.text().await.map_err(transport)?;
        Ok((status, text))
    }

    #[cfg(not(feature = "csr"))]
    async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> Result<(u16, String), ApiError> {
        let _ = (path, body);
        Err(unavailable())
    }

    #[cfg(feature = "csr")]
    async fn get_text(&self, path: &str) -> Result<(u16, String), ApiError> {
        let resp = gloo_net::http::Request::get(&self.url(path))
            .send()
            .await
            .map_err(transport)?;
        let status = resp.status();
        let text = resp.text().await.map_err(transport)?;
        Ok((status, text))
    }

    #[cfg(not(feature = "csr"))]
    async fn get_text(&self, path: &str) -> Result<(u16, String), ApiError> {
        let _ = path;
        Err(unavailable())
    }
}

impl ChatApi for HttpApi {
    async fn login(&self, credentials: &Credentials) -> Result<ApiReply, ApiError> {
        let (status, body) = self.post_json(LOGIN_PATH, credentials).await?;
        interpret_reply(status, &body)
    }

    async fn register(&self, credentials: &Credentials) -> Result<ApiReply, ApiError> {
        let (status, body) = self.post_json(REGISTER_PATH, credentials).await?;
        interpret_reply(status, &body)
    }

    async fn send_message(&self, request: &SendMessageRequest) -> Result<(), ApiError> {
        let (status, body) = self.post_json(SEND_PATH, request).await?;
        interpret_ack(status, &body)
    }

    async fn logout(&self, request: &LogoutRequest) -> Result<(), ApiError> {
        let (status, body) = self.post_json(LOGOUT_PATH, request).await?;
        interpret_ack(status, &body)
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        let (status, body) = self.get_text(HEALTH_PATH).await?;
        interpret_health(status, &body)
    }
}

#[cfg(feature = "csr")]
fn transport(err: impl std::fmt::Display) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> ApiError {
    ApiError::Transport("http is only available in the browser".to_owned())
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Parse a reply body, treating an empty body as an empty reply.
fn parse_reply(body: &str) -> Result<ApiReply, serde_json::Error> {
    if body.trim().is_empty() {
        return Ok(ApiReply::default());
    }
    serde_json::from_str(body)
}

/// Accept or reject a `{ success, message }` style reply.
///
/// A non-2xx status is a rejection carrying whatever `message` the body has.
/// A 2xx status with `success: false` is also a rejection. A non-empty body
/// that is not JSON is malformed under any status (a proxy error page is not
/// an answer from the chat server).
pub(crate) fn interpret_reply(status: u16, body: &str) -> Result<ApiReply, ApiError> {
    let reply = parse_reply(body).map_err(|e| ApiError::Malformed(e.to_string()))?;
    if !is_success(status) {
        return Err(ApiError::Rejected { status, message: reply.message });
    }
    if reply.success == Some(false) {
        return Err(ApiError::Rejected { status, message: reply.message });
    }
    Ok(reply)
}

/// Like [`interpret_reply`] for endpoints whose success body is never read:
/// an unparseable body under a 2xx status still counts as accepted.
pub(crate) fn interpret_ack(status: u16, body: &str) -> Result<(), ApiError> {
    match interpret_reply(status, body) {
        Ok(_) => Ok(()),
        Err(ApiError::Malformed(_)) if is_success(status) => Ok(()),
        Err(e) => Err(e),
    }
}

pub(crate) fn interpret_health(status: u16, body: &str) -> Result<HealthStatus, ApiError> {
    if !is_success(status) {
        return Err(ApiError::Rejected { status, message: None });
    }
    serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))
}
