//! Dashboard route handler

use crate::use_platform;
use dioxus::prelude::*;

/// Player search dashboard route
#[component]
pub fn DashboardRoute() -> Element {
    let platform = use_platform();

    use_effect(move || {
        platform.set_page_title("Dashboard - Scoutdesk");
    });

    rsx! {
        crate::presentation::views::dashboard::DashboardView {}
    }
}
