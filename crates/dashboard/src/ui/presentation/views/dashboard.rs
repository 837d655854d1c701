//! Dashboard view - player search, pagination and CSV export

use std::sync::Arc;

use dioxus::prelude::*;
use scoutdesk_domain::{Player, POSITION_OPTIONS};

use crate::application::controllers::{DashboardController, FilterAction, SearchField};
use crate::application::services::PlayerService;
use crate::infrastructure::spawn_task;
use crate::presentation::components::pagination::Pagination;
use crate::presentation::components::player_badges::{OverallBadge, PositionBadges};
use crate::presentation::services::use_services;
use crate::routes::Route;
use crate::use_platform;

/// Apply one form edit and run the search it asks for, if any.
fn apply_field(
    mut ctl: Signal<DashboardController>,
    players: Arc<PlayerService>,
    field: SearchField,
    value: String,
) {
    let FilterAction::Search(ticket) = ctl.write().set_field(field, &value) else {
        return;
    };
    spawn_task(async move {
        let result = players.search(&ticket.filters).await;
        ctl.write().complete_search(ticket, result);
    });
}

#[component]
pub fn DashboardView() -> Element {
    let services = use_services();
    let platform = use_platform();
    let mut ctl = use_signal(|| DashboardController::new(services.page_size));

    // Initial load
    let players_for_load = services.players.clone();
    use_effect(move || {
        let players = players_for_load.clone();
        let ticket = ctl.write().begin_load();
        spawn_task(async move {
            let result = players.list_all().await;
            ctl.write().complete_load(ticket, result);
        });
    });

    let on_name = {
        let players = services.players.clone();
        move |e: FormEvent| apply_field(ctl, players.clone(), SearchField::Name, e.value())
    };
    let on_club = {
        let players = services.players.clone();
        move |e: FormEvent| apply_field(ctl, players.clone(), SearchField::Club, e.value())
    };
    let on_position = {
        let players = services.players.clone();
        move |e: FormEvent| apply_field(ctl, players.clone(), SearchField::Position, e.value())
    };

    let on_export = {
        let players = services.players.clone();
        move |_: MouseEvent| {
            let ticket = ctl.write().begin_export();
            let players = players.clone();
            let platform = platform.clone();
            spawn_task(async move {
                let result = players.export_csv(&ticket.filters).await;
                ctl.write().complete_export(ticket, result, &*platform);
            });
        }
    };

    let view = ctl.read();
    let form = view.form().clone();
    let rows: Vec<Player> = view.displayed_players().to_vec();
    let total_results = view.total_results();
    let current_page = view.current_page();
    let total_pages = view.total_pages();
    let window = view.page_window();
    let loading = view.is_loading();
    let error = view.error().map(str::to_string);
    drop(view);

    rsx! {
        div {
            class: "p-6 flex flex-col gap-4",

            div {
                class: "flex items-center justify-between",
                h1 { class: "text-2xl font-semibold", "Players" }
                button {
                    class: "px-4 py-2 rounded bg-green-600 text-white hover:bg-green-500 disabled:opacity-50",
                    disabled: loading,
                    onclick: on_export,
                    "Export CSV"
                }
            }

            div {
                class: "grid grid-cols-4 gap-3 items-end",
                input {
                    class: "border rounded px-3 py-2",
                    placeholder: "Name",
                    value: "{form.name}",
                    oninput: on_name,
                }
                input {
                    class: "border rounded px-3 py-2",
                    placeholder: "Club",
                    value: "{form.club}",
                    oninput: on_club,
                }
                select {
                    class: "border rounded px-3 py-2",
                    value: "{form.position}",
                    onchange: on_position,
                    option { value: "", "All positions" }
                    for position in POSITION_OPTIONS.iter().copied() {
                        option { key: "{position}", value: "{position}", "{position}" }
                    }
                }
                button {
                    class: "px-4 py-2 rounded border hover:bg-gray-100",
                    onclick: move |_| ctl.write().clear_filters(),
                    "Clear filters"
                }
            }

            if let Some(error) = error {
                div { class: "p-3 rounded bg-red-100 text-red-700", "{error}" }
            }

            div {
                class: "text-sm text-gray-600",
                if loading { "Loading..." } else { "{total_results} players found" }
            }

            table {
                class: "w-full text-left border-collapse",
                thead {
                    tr {
                        class: "border-b",
                        th { class: "py-2", "Name" }
                        th { "Age" }
                        th { "Nationality" }
                        th { "Club" }
                        th { "Positions" }
                        th { "Overall" }
                    }
                }
                tbody {
                    for (index, player) in rows.into_iter().enumerate() {
                        PlayerRow { key: "{index}-{player.long_name}", player }
                    }
                }
            }

            Pagination {
                current_page,
                total_pages,
                window,
                on_select: move |page| ctl.write().go_to_page(page),
                on_previous: move |_| ctl.write().previous_page(),
                on_next: move |_| ctl.write().next_page(),
            }
        }
    }
}

#[component]
fn PlayerRow(player: Player) -> Element {
    rsx! {
        tr {
            class: "border-b hover:bg-gray-50",
            td {
                class: "py-2",
                {match player.id {
                    Some(id) => rsx! {
                        Link {
                            to: Route::PlayerDetailRoute { id: id.to_string() },
                            class: "text-blue-700 hover:underline",
                            "{player.long_name}"
                        }
                    },
                    None => rsx! { "{player.long_name}" },
                }}
            }
            td { "{player.age}" }
            td { "{player.nationality_name}" }
            td { "{player.club_name}" }
            td { PositionBadges { positions: player.player_positions.clone() } }
            td { OverallBadge { overall: player.overall } }
        }
    }
}
