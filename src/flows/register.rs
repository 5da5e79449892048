//! Account registration from the login form.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use crate::net::api::ChatApi;
use crate::state::ClientState;
use crate::state::store::StateStore;

/// Register the typed username/password. Never logs in or changes view.
pub async fn submit_registration<A: ChatApi, S: StateStore>(api: &A, store: &S) {
    let Some(credentials) = store.read_state(ClientState::form_credentials) else {
        return;
    };

    match api.register(&credentials).await {
        Ok(reply) => {
            log::info!("registered {}", credentials.username);
            store.update_state(|s| s.registration_succeeded(&reply));
        }
        Err(err) => {
            if !err.is_rejection() {
                log::error!("registration error: {err}");
            }
            store.update_state(|s| s.registration_failed(&err));
        }
    }
}
