//! Access seam between async flows and the client state.
//!
//! In the app the state is an `RwSignal<ClientState>` provided via context;
//! tests drive the same flows against a `RefCell<ClientState>`. Flows only
//! ever hold the state inside these closures, never across an `.await`.

use std::cell::RefCell;

use leptos::prelude::{RwSignal, Update, WithUntracked};

use super::ClientState;

pub trait StateStore {
    /// Run `f` against the current state. `None` if the state is gone.
    fn read_state<R>(&self, f: impl FnOnce(&ClientState) -> R) -> Option<R>;

    /// Run `f` against the state mutably. `None` if the state is gone.
    fn update_state<R>(&self, f: impl FnOnce(&mut ClientState) -> R) -> Option<R>;
}

impl StateStore for RwSignal<ClientState> {
    fn read_state<R>(&self, f: impl FnOnce(&ClientState) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut ClientState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl StateStore for RefCell<ClientState> {
    fn read_state<R>(&self, f: impl FnOnce(&ClientState) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut ClientState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
