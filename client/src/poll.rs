//! Cancellable view polling.
//!
//! DESIGN
//! ======
//! Polling views hold a [`PollHandle`] and stop it in `on_cleanup`, so a
//! timer never outlives its view. Cancellation is a first-class, observable
//! operation rather than an implicit drop. In-flight requests are not
//! aborted by cancellation — each one is bounded by its own timeout.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Refresh cadence of the overview page.
pub const OVERVIEW_POLL_SECS: u64 = 30;

/// Liveness handle for a polling loop.
#[derive(Clone, Debug)]
pub struct PollHandle {
    alive: Arc<AtomicBool>,
}

impl PollHandle {
    fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    /// Stop the loop; its next wake-up exits without ticking. Idempotent.
    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        !self.alive.load(Ordering::Relaxed)
    }
}

/// Start ticking `callback` every `interval` until the handle is cancelled.
///
/// The first tick fires after one full interval — mount-time loading is the
/// view's own initial fetch, not the poller's job. Off-wasm no task is
/// spawned; the handle still observes cancellation so tests can drive it.
#[must_use]
pub fn start_polling<F>(interval: Duration, callback: F) -> PollHandle
where
    F: Fn() + 'static,
{
    let handle = PollHandle::new();

    #[cfg(feature = "hydrate")]
    {
        let alive = handle.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(interval).await;
                if alive.is_cancelled() {
                    break;
                }
                callback();
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (interval, callback);
    }

    handle
}
