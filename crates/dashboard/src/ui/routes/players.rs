//! Player management route handler

use crate::use_platform;
use dioxus::prelude::*;

#[component]
pub fn PlayersRoute() -> Element {
    let platform = use_platform();

    use_effect(move || {
        platform.set_page_title("Players - Scoutdesk");
    });

    rsx! {
        crate::presentation::views::players::PlayersView {}
    }
}
