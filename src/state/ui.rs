//! Presentation state: active view, notices, form fields.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns apart from the session and
//! transcript so rendering can change without touching flow logic.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Which top-level container is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Login,
    Dashboard,
}

/// Styling of the shared notice element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// The single notice shown under the login form.
///
/// Every attempt overwrites it, so only the latest outcome is visible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }
}

/// Contents of the login form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn reset(&mut self) {
        self.username.clear();
        self.password.clear();
    }
}

/// Result of the one-shot health probe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ServerStatus {
    #[default]
    Unknown,
    Online,
    Offline,
}

impl ServerStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Checking server...",
            Self::Online => "Server online",
            Self::Offline => "Server unreachable",
        }
    }
}
