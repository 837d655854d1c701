//! Player detail route handler

use crate::use_platform;
use dioxus::prelude::*;

/// Player detail route. The raw id is handed to the view unparsed so an
/// invalid id surfaces as the view's error state.
#[component]
pub fn PlayerDetailRoute(id: String) -> Element {
    let platform = use_platform();

    use_effect(move || {
        platform.set_page_title("Player - Scoutdesk");
    });

    rsx! {
        crate::presentation::views::player_detail::PlayerDetailView {
            // Remount on id change so the controller starts fresh.
            key: "{id}",
            player_id: id.clone(),
        }
    }
}
