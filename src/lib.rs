//! # chat-client
//!
//! Leptos + WASM browser client for the chat service.
//!
//! The client logs a user in against the chat API, switches between the
//! login and dashboard views, sends chat messages and renders them in a local
//! transcript, and resets everything on logout.
//!
//! LAYOUT
//! ======
//! `state` holds the pure session/transcript model, `net` the HTTP surface,
//! `flows` joins the two into user-triggered async sequences, and
//! `pages`/`components` project state onto the DOM.

pub mod app;
pub mod components;
pub mod config;
pub mod flows;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
