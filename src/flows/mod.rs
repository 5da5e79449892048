//! User-triggered flows: state transition, one request, continuation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages spawn these with `leptos::task::spawn_local`. Each driver is generic
//! over the [`ChatApi`](crate::net::api::ChatApi) and the
//! [`StateStore`](crate::state::store::StateStore) so the same code runs in
//! the browser and in native tests.
//!
//! ERROR POLICY
//! ============
//! | flow     | rejection          | transport failure  |
//! |----------|--------------------|--------------------|
//! | login    | notice             | notice + log       |
//! | register | notice             | notice + log       |
//! | send     | dashboard notice   | dashboard notice   |
//! | logout   | log only           | log only           |
//! | health   | status label       | status label       |
//!
//! Continuations re-read state when they resume; nothing is held across an
//! `.await`.

pub mod health;
pub mod login;
pub mod logout;
pub mod message;
pub mod register;

#[cfg(test)]
pub(crate) mod test_support;

#[cfg(test)]
#[path = "scenario_test.rs"]
mod scenario_test;
