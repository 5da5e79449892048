//! Networking modules for the chat REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `error` categorizes their failures, and
//! `types` defines the JSON wire schema.

pub mod api;
pub mod error;
pub mod types;
