use super::*;

fn ok() -> Result<HealthResponse, ApiError> {
    Ok(HealthResponse {
        status: HealthStatus::Ok,
    })
}

fn unhealthy() -> Result<HealthResponse, ApiError> {
    Ok(HealthResponse {
        status: HealthStatus::Unhealthy,
    })
}

fn unreachable() -> Result<HealthResponse, ApiError> {
    Err(ApiError::Transport("connection refused".to_owned()))
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn starts_blocking_until_first_ok() {
    let state = HealthState::default();
    assert_eq!(state.phase, HealthPhase::Unhealthy);
    assert!(state.is_blocking());
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn ok_poll_unblocks() {
    let mut state = HealthState::default();
    state.apply(ok());
    assert_eq!(state.phase, HealthPhase::Healthy);
    assert!(!state.is_blocking());
}

#[test]
fn unhealthy_status_blocks() {
    let mut state = HealthState::default();
    state.apply(ok());
    state.apply(unhealthy());
    assert!(state.is_blocking());
}

#[test]
fn transport_error_blocks() {
    let mut state = HealthState::default();
    state.apply(ok());
    state.apply(unreachable());
    assert!(state.is_blocking());
}

// =============================================================
// Poll cadence
// =============================================================

#[test]
fn cadence_follows_phase_across_a_poll_sequence() {
    // ok, unhealthy, unhealthy, ok => 30s, 3s, 3s, 30s.
    let mut state = HealthState::default();
    let results = [ok(), unhealthy(), unreachable(), ok()];
    let expected = [
        HEALTHY_POLL_MS,
        UNHEALTHY_POLL_MS,
        UNHEALTHY_POLL_MS,
        HEALTHY_POLL_MS,
    ];
    let blocking = [false, true, true, false];
    for ((result, delay), blocked) in results.into_iter().zip(expected).zip(blocking) {
        state.apply(result);
        assert_eq!(state.poll_interval_ms(), delay);
        assert_eq!(state.is_blocking(), blocked);
    }
}
