//! Small badges used in player tables

use dioxus::prelude::*;
use scoutdesk_domain::{position_class, OverallTier};

#[component]
pub fn OverallBadge(overall: u8) -> Element {
    let class = OverallTier::from_overall(overall).css_class();
    rsx! {
        span { class: "overall-badge {class}", "{overall}" }
    }
}

/// One badge per comma separated position
#[component]
pub fn PositionBadges(positions: String) -> Element {
    rsx! {
        span {
            class: "inline-flex flex-wrap gap-1",
            for position in positions.split(',').map(str::trim).filter(|p| !p.is_empty()) {
                span {
                    key: "{position}",
                    class: "position-badge {position_class(position)}",
                    "{position}"
                }
            }
        }
    }
}
