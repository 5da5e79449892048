//! JSON request and reply DTOs for the chat API.
//!
//! DESIGN
//! ======
//! Field names match the server's JSON keys exactly. Reply fields are all
//! optional because the server omits them freely and an empty body is a
//! valid acknowledgement.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /auth/login` and `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Body of `POST /chat/send`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SendMessageRequest {
    /// Username the message is attributed to.
    pub sender: String,
    /// Trimmed message text.
    pub message: String,
    /// Direct recipient; the server broadcasts when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
}

/// Body of `POST /auth/logout`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LogoutRequest {
    pub username: String,
}

/// Generic `{ success, message, username }` reply used by the auth and chat endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiReply {
    /// Explicit outcome flag; `Some(false)` is a rejection even under a 2xx status.
    #[serde(default)]
    pub success: Option<bool>,
    /// Human-readable server message, shown to the user on failure.
    #[serde(default)]
    pub message: Option<String>,
    /// Echoed username on login.
    #[serde(default)]
    pub username: Option<String>,
}

/// Reply of `GET /health`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
}

impl HealthStatus {
    /// Whether the server reported itself healthy.
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
