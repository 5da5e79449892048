//! Session identity for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written only by the login and logout flows; read by the send flow to
//! attribute outgoing messages and by the dashboard header.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Who is logged in, if anyone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    /// No user is logged in.
    #[default]
    Anonymous,
    /// A user has logged in and the dashboard is showing.
    Active { username: String },
}

impl Session {
    pub fn active(username: impl Into<String>) -> Self {
        Self::Active { username: username.into() }
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::Active { username } => Some(username),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }
}
