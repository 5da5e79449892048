//! Client-side state and its transitions.
//!
//! DESIGN
//! ======
//! `ClientState` is the one session context object every flow works on. All
//! of its transitions are plain synchronous methods, so the login/send/logout
//! rules are testable without a browser; `pages` and `components` only
//! project it onto the DOM.
//!
//! INVARIANTS
//! ==========
//! - `session` is active iff `view` is `View::Dashboard`. A login that has
//!   been accepted but is still inside its redirect delay lives in
//!   `pending_login`, not in `session`.
//! - `transcript` is empty right after logout.
//! - `session_epoch` changes whenever the session starts or ends, so a
//!   completion can tell whether it still belongs to the session that issued
//!   its request even when the same user logs straight back in.


pub mod session;
pub mod store;
pub mod transcript;
pub mod ui;

use crate::net::error::ApiError;
use crate::net::types::{ApiReply, Credentials, LogoutRequest, SendMessageRequest};
use session::Session;
use transcript::{EntryKind, Transcript};
use ui::{LoginForm, Notice, ServerStatus, View};

pub const LOGIN_SUCCESS_TEXT: &str = "Login successful! Redirecting...";
pub const LOGIN_FAILED_TEXT: &str = "Login failed. Please try again.";
pub const REGISTER_SUCCESS_TEXT: &str = "Registration successful. You can now log in.";
pub const REGISTER_FAILED_TEXT: &str = "Registration failed.";
pub const SEND_FAILED_TEXT: &str = "Message could not be sent.";

/// Why a send produced no request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendBlocked {
    /// The trimmed input is empty.
    EmptyMessage,
    /// Nobody is logged in to attribute the message to.
    NoSession,
}

/// An accepted login waiting out its redirect delay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingLogin {
    /// Which login attempt was accepted; only that attempt's timer commits it.
    pub attempt: u64,
    pub username: String,
}

/// A send request together with the session that issued it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedSend {
    pub request: SendMessageRequest,
    pub session_epoch: u64,
}

/// Everything the client knows for the current page load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientState {
    pub session: Session,
    pub view: View,
    pub transcript: Transcript,
    pub login_form: LoginForm,
    pub message_input: String,
    /// Shared notice under the login form.
    pub notice: Option<Notice>,
    /// Dashboard notice for the most recent failed send.
    pub send_error: Option<String>,
    pub pending_login: Option<PendingLogin>,
    /// Counts accepted logins.
    pub login_attempts: u64,
    /// Bumped on every session start and end.
    pub session_epoch: u64,
    pub server_status: ServerStatus,
    /// Service name from the last health reply, if the server sent one.
    pub server_name: Option<String>,
}

impl ClientState {
    /// Whether the session/view invariant holds.
    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        self.session.is_active() == (self.view == View::Dashboard)
    }

    /// Text for the server status line under the login form.
    pub fn server_status_text(&self) -> String {
        match (self.server_status, self.server_name.as_deref()) {
            (ServerStatus::Online, Some(name)) if !name.is_empty() => {
                format!("{} ({name})", ServerStatus::Online.label())
            }
            (status, _) => status.label().to_owned(),
        }
    }

    // =========================================================================
    // LOGIN / REGISTER
    // =========================================================================

    /// Credentials exactly as typed; no format validation happens client-side.
    pub fn form_credentials(&self) -> Credentials {
        Credentials {
            username: self.login_form.username.clone(),
            password: self.login_form.password.clone(),
        }
    }

    /// Hold an accepted login until its redirect delay ends. Returns the
    /// attempt number to hand back to [`Self::enter_dashboard`].
    pub fn login_accepted(&mut self, username: &str) -> u64 {
        self.login_attempts += 1;
        self.pending_login = Some(PendingLogin { attempt: self.login_attempts, username: username.to_owned() });
        self.notice = Some(Notice::success(LOGIN_SUCCESS_TEXT));
        self.login_attempts
    }

    pub fn login_failed(&mut self, err: &ApiError) {
        self.pending_login = None;
        self.notice = Some(Notice::error(err.notice_text(LOGIN_FAILED_TEXT)));
    }

    /// Commit a pending login: activate the session and show the dashboard.
    ///
    /// Returns `false` when `attempt` is no longer the pending one (a later
    /// attempt replaced or cancelled it, or logout ran in between).
    pub fn enter_dashboard(&mut self, attempt: u64) -> bool {
        let Some(pending) = self.pending_login.take_if(|p| p.attempt == attempt) else {
            return false;
        };
        self.session = Session::active(pending.username);
        self.view = View::Dashboard;
        self.session_epoch += 1;
        true
    }

    pub fn registration_succeeded(&mut self, reply: &ApiReply) {
        let text = reply
            .message
            .clone()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| REGISTER_SUCCESS_TEXT.to_owned());
        self.notice = Some(Notice::success(text));
        self.login_form.password.clear();
    }

    pub fn registration_failed(&mut self, err: &ApiError) {
        self.notice = Some(Notice::error(err.notice_text(REGISTER_FAILED_TEXT)));
    }

    // =========================================================================
    // SEND
    // =========================================================================

    /// Build the send request from the current input and session.
    ///
    /// # Errors
    ///
    /// Returns the reason no request should be made.
    pub fn prepare_send(&self) -> Result<PreparedSend, SendBlocked> {
        let message = self.message_input.trim();
        if message.is_empty() {
            return Err(SendBlocked::EmptyMessage);
        }
        let Some(sender) = self.session.username() else {
            return Err(SendBlocked::NoSession);
        };
        Ok(PreparedSend {
            request: SendMessageRequest {
                sender: sender.to_owned(),
                message: message.to_owned(),
                recipient: None,
            },
            session_epoch: self.session_epoch,
        })
    }

    /// Record a confirmed send. Dropped if the session changed in flight.
    pub fn message_sent(&mut self, send: &PreparedSend) -> bool {
        if !self.owns(send) {
            return false;
        }
        self.transcript.push(EntryKind::Sent, send.request.message.clone());
        self.message_input.clear();
        self.send_error = None;
        true
    }

    /// Record a failed send; the input stays as typed.
    pub fn message_failed(&mut self, send: &PreparedSend) -> bool {
        if !self.owns(send) {
            return false;
        }
        self.send_error = Some(SEND_FAILED_TEXT.to_owned());
        true
    }

    fn owns(&self, send: &PreparedSend) -> bool {
        self.session.is_active() && self.session_epoch == send.session_epoch
    }

    // =========================================================================
    // LOGOUT
    // =========================================================================

    pub fn logout_request(&self) -> Option<LogoutRequest> {
        self.session
            .username()
            .map(|username| LogoutRequest { username: username.to_owned() })
    }

    /// Local logout reset. Runs whatever the server said.
    pub fn reset_after_logout(&mut self) {
        self.session = Session::Anonymous;
        self.view = View::Login;
        self.login_form.reset();
        self.transcript.clear();
        self.message_input.clear();
        self.notice = None;
        self.send_error = None;
        self.pending_login = None;
        self.session_epoch += 1;
    }
}
