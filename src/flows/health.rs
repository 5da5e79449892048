//! One-shot server health probe run at startup.

#[cfg(test)]
#[path = "health_test.rs"]
mod health_test;

use crate::net::api::ChatApi;
use crate::state::store::StateStore;
use crate::state::ui::ServerStatus;

pub async fn probe_health<A: ChatApi, S: StateStore>(api: &A, store: &S) {
    let (status, name) = match api.health().await {
        Ok(health) if health.is_ok() => {
            log::info!("server online: {}", health.service.as_deref().unwrap_or("unnamed service"));
            (ServerStatus::Online, health.service)
        }
        Ok(health) => {
            log::warn!("server reported status {:?}", health.status);
            (ServerStatus::Offline, health.service)
        }
        Err(err) => {
            log::warn!("health check failed: {err}");
            (ServerStatus::Offline, None)
        }
    };
    store.update_state(|s| {
        s.server_status = status;
        s.server_name = name;
    });
}
