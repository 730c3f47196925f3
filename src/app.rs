//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::health_gate::HealthGate;
use crate::net::query::CacheEntry;
use crate::net::types::NotificationsResponse;
use crate::pages::{login::LoginPage, notifications::NotificationsPage};
use crate::state::health::HealthState;
use crate::state::session::restore_session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, health, and notifications-cache contexts and sets
/// up client-side routing. The whole routed area sits behind [`HealthGate`]
/// so an unhealthy API blocks every page the same way.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(restore_session());
    let health = RwSignal::new(HealthState::default());
    let notifications = RwSignal::new(CacheEntry::<NotificationsResponse>::default());

    provide_context(session);
    provide_context(health);
    provide_context(notifications);

    view! {
        <Stylesheet id="leptos" href="/pkg/notifications-client.css"/>
        <Title text="User Preferences"/>

        <Router>
            <HealthGate>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("") view=NotificationsPage/>
                </Routes>
            </HealthGate>
        </Router>
    }
}
