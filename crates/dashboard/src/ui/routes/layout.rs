//! Shell and guard layouts

use dioxus::prelude::*;

use crate::application::route_guard;
use crate::presentation::components::header::Header;
use crate::presentation::services::use_services;
use crate::presentation::state::session_state::use_session_state;

use super::Route;

/// Header plus the routed page
#[component]
pub fn AppShell() -> Element {
    rsx! {
        div {
            class: "app-shell",
            Header {}
            main {
                class: "app-content",
                Outlet::<Route> {}
            }
        }
    }
}

/// Renders its children only for a signed-in session; otherwise replaces
/// the current entry with the login route.
#[component]
pub fn ProtectedLayout() -> Element {
    let services = use_services();
    let navigator = use_navigator();
    let auth = use_session_state().auth();

    // Subscribe so a logout elsewhere re-runs the guard.
    let _ = auth.read();
    let decision = route_guard::check(&services.session);

    use_effect(move || {
        let _ = auth.read();
        if !route_guard::check(&services.session).is_allowed() {
            tracing::debug!("Protected route without a session, redirecting to login");
            navigator.replace(Route::LoginRoute {});
        }
    });

    if !decision.is_allowed() {
        return rsx! {};
    }

    rsx! {
        Outlet::<Route> {}
    }
}
