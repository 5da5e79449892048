//! Reusable view pieces used by the login and dashboard pages.

pub mod notice;
pub mod transcript;
