//! Send-message flow.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use crate::net::api::ChatApi;
use crate::state::store::StateStore;
use crate::state::{ClientState, SendBlocked};

/// Send the current message input.
///
/// Whitespace-only input is a silent no-op, and so is sending without a
/// session (logged at warn). A confirmed send appends to the transcript and
/// clears the input; a failed one keeps the input and raises the dashboard
/// notice. Completions for a session that ended in flight are dropped.
pub async fn send_message<A: ChatApi, S: StateStore>(api: &A, store: &S) {
    let Some(prepared) = store.read_state(ClientState::prepare_send) else {
        return;
    };
    let send = match prepared {
        Ok(send) => send,
        Err(SendBlocked::EmptyMessage) => return,
        Err(SendBlocked::NoSession) => {
            log::warn!("message not sent: no active session");
            return;
        }
    };

    let applied = match api.send_message(&send.request).await {
        Ok(()) => store.update_state(|s| s.message_sent(&send)),
        Err(err) => {
            log::warn!("failed to send message: {err}");
            store.update_state(|s| s.message_failed(&send))
        }
    };
    if applied != Some(true) {
        log::debug!("dropping send result for {}: session changed", send.request.sender);
    }
}
