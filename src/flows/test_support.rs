//! Recording fake of the chat API for flow tests.

use std::cell::RefCell;

use crate::net::api::ChatApi;
use crate::net::error::ApiError;
use crate::net::types::{ApiReply, Credentials, HealthStatus, LogoutRequest, SendMessageRequest};
use crate::state::ClientState;

/// A request the fake received, in call order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Login(Credentials),
    Register(Credentials),
    Send(SendMessageRequest),
    Logout(LogoutRequest),
    Health,
}

pub struct FakeApi {
    pub calls: RefCell<Vec<Call>>,
    pub login: Result<ApiReply, ApiError>,
    pub register: Result<ApiReply, ApiError>,
    pub send: Result<(), ApiError>,
    pub logout: Result<(), ApiError>,
    pub health: Result<HealthStatus, ApiError>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            login: Ok(ApiReply::default()),
            register: Ok(ApiReply::default()),
            send: Ok(()),
            logout: Ok(()),
            health: Ok(HealthStatus { status: "ok".to_owned(), service: None }),
        }
    }
}

impl FakeApi {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl ChatApi for FakeApi {
    async fn login(&self, credentials: &Credentials) -> Result<ApiReply, ApiError> {
        self.record(Call::Login(credentials.clone()));
        self.login.clone()
    }

    async fn register(&self, credentials: &Credentials) -> Result<ApiReply, ApiError> {
        self.record(Call::Register(credentials.clone()));
        self.register.clone()
    }

    async fn send_message(&self, request: &SendMessageRequest) -> Result<(), ApiError> {
        self.record(Call::Send(request.clone()));
        self.send.clone()
    }

    async fn logout(&self, request: &LogoutRequest) -> Result<(), ApiError> {
        self.record(Call::Logout(request.clone()));
        self.logout.clone()
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.record(Call::Health);
        self.health.clone()
    }
}

pub fn offline() -> ApiError {
    ApiError::Transport("network unreachable".to_owned())
}

/// State with `username` already on the dashboard.
pub fn logged_in(username: &str) -> ClientState {
    let mut state = ClientState::default();
    let attempt = state.login_accepted(username);
    state.enter_dashboard(attempt);
    state.notice = None;
    state
}

/// Delay stand-in that resolves immediately.
pub async fn no_delay(_: std::time::Duration) {}
