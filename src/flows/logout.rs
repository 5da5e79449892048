//! Logout flow.

#[cfg(test)]
#[path = "logout_test.rs"]
mod logout_test;

use crate::net::api::ChatApi;
use crate::state::ClientState;
use crate::state::store::StateStore;

/// Tell the server, then reset locally no matter what it said.
pub async fn logout<A: ChatApi, S: StateStore>(api: &A, store: &S) {
    if let Some(request) = store.read_state(ClientState::logout_request).flatten() {
        if let Err(err) = api.logout(&request).await {
            log::warn!("logout request for {} failed: {err}", request.username);
        }
    }
    store.update_state(ClientState::reset_after_logout);
}
