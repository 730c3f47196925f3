use super::*;

// =============================================================
// Host-side behavior (no browser storage or media queries)
// =============================================================

#[test]
fn defaults_to_light_without_a_browser() {
    assert!(!prefers_dark());
}

#[test]
fn toggle_flips_the_current_scheme() {
    assert!(toggle(false));
    assert!(!toggle(true));
}
