//! Availability gate: blocks the UI while the API is down.

use leptos::prelude::*;

use crate::state::health::HealthState;

/// Wraps the routed content and overlays a non-dismissible indicator while
/// the last health poll was anything but `ok`. Mounting starts the poll
/// loop; it stops on its own when this scope is disposed.
#[component]
pub fn HealthGate(children: Children) -> impl IntoView {
    let health = expect_context::<RwSignal<HealthState>>();

    #[cfg(feature = "hydrate")]
    crate::net::poller::spawn_health_poller(health);

    let blocking = move || health.get().is_blocking();

    view! {
        {children()}

        <Show when=blocking>
            <div class="dialog-backdrop dialog-backdrop--blocking">
                <div class="dialog dialog--alert">
                    <h2>"API Error"</h2>
                    <p>"We're having trouble connecting to the API."</p>
                    <p class="dialog__dim">"Waiting for API..."</p>
                </div>
            </div>
        </Show>
    }
}
