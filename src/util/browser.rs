//! Task spawning and timers.
//!
//! In the browser (csr) flows run on the page's single-threaded task queue
//! and delays use `setTimeout`. Native builds have neither, so spawned work
//! is discarded and delays resolve immediately.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use std::future::Future;
use std::time::Duration;

/// Run a flow on the browser task queue.
pub fn spawn_flow(flow: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(flow);
    #[cfg(not(feature = "csr"))]
    drop(flow);
}

/// Wait for `duration`.
#[allow(clippy::unused_async)]
pub async fn sleep(duration: Duration) {
    #[cfg(feature = "csr")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(feature = "csr"))]
    let _ = duration;
}
