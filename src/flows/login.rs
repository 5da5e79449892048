//! Login flow: authenticate, announce, then switch to the dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::future::Future;
use std::time::Duration;

use crate::config::LOGIN_REDIRECT_DELAY;
use crate::net::api::ChatApi;
use crate::state::ClientState;
use crate::state::store::StateStore;

/// Submit the login form.
///
/// On acceptance the success notice shows immediately and the dashboard
/// appears once `delay(LOGIN_REDIRECT_DELAY)` resolves, unless a newer
/// attempt or a logout took over in the meantime. Any failure leaves
/// the session anonymous and explains itself in the shared notice.
pub async fn submit_login<A, S, D, F>(api: &A, store: &S, delay: D)
where
    A: ChatApi,
    S: StateStore,
    D: FnOnce(Duration) -> F,
    F: Future<Output = ()>,
{
    let Some(credentials) = store.read_state(ClientState::form_credentials) else {
        return;
    };

    match api.login(&credentials).await {
        Ok(_) => {
            log::info!("login accepted for {}", credentials.username);
            let Some(attempt) = store.update_state(|s| s.login_accepted(&credentials.username)) else {
                return;
            };
            delay(LOGIN_REDIRECT_DELAY).await;
            if store.update_state(|s| s.enter_dashboard(attempt)) != Some(true) {
                log::debug!("login for {} superseded before redirect", credentials.username);
            }
        }
        Err(err) => {
            if err.is_rejection() {
                log::info!("login rejected for {}: {err}", credentials.username);
            } else {
                log::error!("login error: {err}");
            }
            store.update_state(|s| s.login_failed(&err));
        }
    }
}
