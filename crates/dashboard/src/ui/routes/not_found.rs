//! Fallback for unknown paths

use dioxus::prelude::*;

use super::Route;

/// Any unknown path lands on the dashboard.
#[component]
pub fn NotFoundRoute(segments: Vec<String>) -> Element {
    let navigator = use_navigator();

    use_effect(move || {
        tracing::debug!(path = %segments.join("/"), "Unknown route");
        navigator.replace(Route::DashboardRoute {});
    });

    rsx! {}
}
