//! Login route handler

use crate::use_platform;
use dioxus::prelude::*;

/// Login / registration route
#[component]
pub fn LoginRoute() -> Element {
    let platform = use_platform();

    // Set page title
    use_effect(move || {
        platform.set_page_title("Sign in - Scoutdesk");
    });

    rsx! {
        crate::presentation::views::login::LoginView {}
    }
}
