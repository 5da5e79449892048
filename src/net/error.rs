//! Categorized failures for chat API calls.
//!
//! Every network call returns `Result<_, ApiError>`; each flow decides which
//! variants reach the user and which are only logged.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Notice text for any failure that is not an explicit server rejection.
pub const CONNECTION_ERROR_TEXT: &str = "Error connecting to server.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be built, sent, or its body read.
    #[error("transport error: {0}")]
    Transport(String),
    /// The server answered but refused the request.
    #[error("rejected with status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { status: u16, message: Option<String> },
    /// A success status arrived with a body that is not valid JSON.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ApiError {
    /// Text for the shared notice element.
    ///
    /// Rejections show the server's message when it sent one and `fallback`
    /// otherwise; everything else is reported as a connection problem.
    pub fn notice_text(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { message: Some(message), .. } if !message.is_empty() => message.clone(),
            Self::Rejected { .. } => fallback.to_owned(),
            Self::Transport(_) | Self::Malformed(_) => CONNECTION_ERROR_TEXT.to_owned(),
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}
