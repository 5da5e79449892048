//! Top-level views.
//!
//! ARCHITECTURE
//! ============
//! Exactly one of the two views is mounted at a time, chosen by
//! `ClientState::view`. Each page wires DOM events to `flows` and delegates
//! rendering details to `components`.

pub mod dashboard;
pub mod login;
