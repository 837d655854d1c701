//! Player detail view with the skill radar chart

use dioxus::prelude::*;
use scoutdesk_domain::{Player, SkillCategory};

use crate::application::controllers::player_detail::PlayerDetailController;
use crate::application::controllers::DetailState;
use crate::infrastructure::spawn_task;
use crate::presentation::components::player_badges::{OverallBadge, PositionBadges};
use crate::presentation::components::radar_chart::{RadarChart, RadarFrame, SvgRadarRenderer};
use crate::presentation::services::use_player_service;
use crate::routes::Route;

#[derive(Props, Clone, PartialEq)]
pub struct PlayerDetailViewProps {
    /// Raw id segment from the route
    pub player_id: String,
}

/// Owns the detail controller for as long as it is mounted; unmounting
/// drops the controller, which disposes the live chart.
#[component]
pub fn PlayerDetailView(props: PlayerDetailViewProps) -> Element {
    let player_service = use_player_service();
    let frame = use_signal(|| None::<RadarFrame>);
    let mut ctl = use_signal(|| {
        PlayerDetailController::open(SvgRadarRenderer::new(frame), Some(&props.player_id))
    });

    use_effect(move || {
        let Some(id) = ctl.peek().player_id() else {
            return;
        };
        let players = player_service.clone();
        spawn_task(async move {
            let result = players.get(id).await;
            ctl.write().complete_load(result);
        });
    });

    let state = ctl.read().state().clone();
    let category = ctl.read().category();

    rsx! {
        div {
            class: "p-6 flex flex-col gap-4",
            Link {
                to: Route::DashboardRoute {},
                class: "text-blue-700 hover:underline",
                "Back to dashboard"
            }

            {match state {
                DetailState::Loading => rsx! {
                    div { class: "text-gray-500", "Loading player..." }
                },
                DetailState::InvalidId | DetailState::Failed(_) => {
                    let message = ctl.read().error().unwrap_or_default().to_string();
                    rsx! {
                        div { class: "p-3 rounded bg-red-100 text-red-700", "{message}" }
                    }
                },
                DetailState::Loaded(player) => rsx! {
                    PlayerSummary { player }

                    div {
                        class: "flex items-center gap-2",
                        label { class: "text-sm text-gray-600", "Category" }
                        select {
                            class: "border rounded px-3 py-1",
                            value: "{category.name()}",
                            onchange: move |e| {
                                ctl.write().select_category(&e.value());
                            },
                            for option_category in SkillCategory::all().iter().copied() {
                                option {
                                    key: "{option_category.name()}",
                                    value: "{option_category.name()}",
                                    "{option_category.name()}"
                                }
                            }
                        }
                    }

                    RadarChart { frame }
                },
            }}
        }
    }
}

#[component]
fn PlayerSummary(player: Player) -> Element {
    rsx! {
        div {
            class: "flex items-center gap-4",
            OverallBadge { overall: player.overall }
            div {
                h1 { class: "text-2xl font-semibold", "{player.long_name}" }
                p {
                    class: "text-gray-600",
                    "{player.club_name} · {player.nationality_name} · {player.age} years"
                }
                PositionBadges { positions: player.player_positions.clone() }
            }
        }
    }
}
