#[cfg(test)]
#[path = "health_test.rs"]
mod health_test;

use crate::net::api::ApiError;
use crate::net::types::{HealthResponse, HealthStatus};

/// Poll cadence while the API reports healthy.
pub const HEALTHY_POLL_MS: u64 = 30_000;
/// Poll cadence while the API is unhealthy or unreachable.
pub const UNHEALTHY_POLL_MS: u64 = 3_000;

/// Last-known health of the API, as seen by the poller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HealthPhase {
    Healthy,
    /// Also the initial phase: the gate blocks until the first poll
    /// confirms the API is reachable and reporting `ok`.
    #[default]
    Unhealthy,
}

/// State behind the availability gate. Ephemeral, never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HealthState {
    pub phase: HealthPhase,
}

impl HealthState {
    /// Fold one poll result into the state. Anything other than a parsed
    /// body with literal status `ok` — including transport errors — counts
    /// as unhealthy.
    pub fn apply(&mut self, result: Result<HealthResponse, ApiError>) {
        self.phase = match result {
            Ok(HealthResponse {
                status: HealthStatus::Ok,
            }) => HealthPhase::Healthy,
            Ok(_) | Err(_) => HealthPhase::Unhealthy,
        };
    }

    /// Whether the blocking overlay should cover the UI.
    pub fn is_blocking(self) -> bool {
        self.phase == HealthPhase::Unhealthy
    }

    /// Delay until the next poll, derived from the current phase.
    pub fn poll_interval_ms(self) -> u64 {
        match self.phase {
            HealthPhase::Healthy => HEALTHY_POLL_MS,
            HealthPhase::Unhealthy => UNHEALTHY_POLL_MS,
        }
    }
}
