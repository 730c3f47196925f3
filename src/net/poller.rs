//! Background health poller driving the availability gate.
//!
//! A single async loop polls `/healthz`, folds the result into the shared
//! [`HealthState`] signal, then sleeps for the interval the *new* phase
//! dictates. One loop means one timer: a phase transition changes the very
//! next sleep, with no overlapping schedules and no drift from a stale
//! interval. Browser-only; everything here lives behind `hydrate`.

#[cfg(feature = "hydrate")]
use crate::state::health::HealthState;

/// Spawn the poll loop as a local task. The loop polls immediately, then
/// at the phase-dependent cadence. It exits when the owning reactive scope
/// is disposed (the signal update fails), so unmounting the gate stops the
/// pending timer.
#[cfg(feature = "hydrate")]
pub fn spawn_health_poller(health: leptos::prelude::RwSignal<HealthState>) {
    leptos::task::spawn_local(poll_loop(health));
}

#[cfg(feature = "hydrate")]
async fn poll_loop(health: leptos::prelude::RwSignal<HealthState>) {
    use std::time::Duration;

    use leptos::prelude::{GetUntracked, Update};

    loop {
        let result = crate::net::api::health().await;
        if let Err(err) = &result {
            leptos::logging::warn!("health check failed: {err}");
        }
        if health.try_update(|h| h.apply(result)).is_none() {
            // Scope disposed; stop polling.
            break;
        }
        let Some(delay_ms) = health.try_get_untracked().map(HealthState::poll_interval_ms) else {
            break;
        };
        gloo_timers::future::sleep(Duration::from_millis(delay_ms)).await;
    }
}
