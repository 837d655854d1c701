//! Player management view - list, create and delete

use std::sync::Arc;

use dioxus::prelude::*;

use crate::application::controllers::{PlayerField, PlayersController};
use crate::application::services::PlayerService;
use crate::infrastructure::spawn_task;
use crate::presentation::components::player_badges::{OverallBadge, PositionBadges};
use crate::presentation::services::use_player_service;
use crate::routes::Route;

fn reload(mut ctl: Signal<PlayersController>, players: Arc<PlayerService>) {
    spawn_task(async move {
        let result = players.list_all().await;
        ctl.write().complete_reload(result);
    });
}

#[component]
pub fn PlayersView() -> Element {
    let player_service = use_player_service();
    let mut ctl = use_signal(PlayersController::new);

    let players_for_load = player_service.clone();
    use_effect(move || reload(ctl, players_for_load.clone()));

    let on_submit = {
        let players = player_service.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let Ok(draft) = ctl.write().begin_create() else {
                return;
            };
            let players = players.clone();
            spawn_task(async move {
                let result = players.create(&draft).await;
                if ctl.write().complete_create(result) {
                    let list = players.list_all().await;
                    ctl.write().complete_reload(list);
                }
            });
        }
    };

    let view = ctl.read().clone();
    let form = view.form().clone();

    rsx! {
        div {
            class: "p-6 grid grid-cols-3 gap-6",

            section {
                class: "col-span-2 flex flex-col gap-3",
                h1 { class: "text-2xl font-semibold", "Manage players" }

                if let Some(error) = view.error() {
                    div { class: "p-3 rounded bg-red-100 text-red-700", "{error}" }
                }

                ul {
                    class: "divide-y border rounded",
                    for player in view.players().iter().cloned() {
                        li {
                            key: "{player.id:?}-{player.long_name}",
                            class: "flex items-center justify-between px-4 py-2",
                            div {
                                class: "flex items-center gap-3",
                                OverallBadge { overall: player.overall }
                                if let Some(id) = player.id {
                                    Link {
                                        to: Route::PlayerDetailRoute { id: id.to_string() },
                                        class: "font-medium text-blue-700 hover:underline",
                                        "{player.long_name}"
                                    }
                                } else {
                                    span { class: "font-medium", "{player.long_name}" }
                                }
                                span { class: "text-gray-500", "{player.club_name}" }
                                PositionBadges { positions: player.player_positions.clone() }
                            }
                            if let Some(id) = player.id {
                                button {
                                    class: "px-3 py-1 rounded text-red-700 hover:bg-red-50",
                                    onclick: {
                                        let players = player_service.clone();
                                        move |_: MouseEvent| {
                                            let players = players.clone();
                                            spawn_task(async move {
                                                let result = players.delete(id).await;
                                                if ctl.write().complete_delete(id, result) {
                                                    reload(ctl, players);
                                                }
                                            });
                                        }
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }

            form {
                class: "flex flex-col gap-3 bg-white rounded-lg shadow p-4 h-fit",
                onsubmit: on_submit,
                h2 { class: "text-lg font-semibold", "New player" }

                FormField {
                    label: "Name",
                    value: form.name.clone(),
                    error: view.field_error("long_name").map(str::to_string),
                    on_input: move |v: String| ctl.write().set_field(PlayerField::Name, &v),
                }
                FormField {
                    label: "Age",
                    value: form.age.clone(),
                    error: view.field_error("age").map(str::to_string),
                    on_input: move |v: String| ctl.write().set_field(PlayerField::Age, &v),
                }
                FormField {
                    label: "Nationality",
                    value: form.nationality.clone(),
                    error: view.field_error("nationality_name").map(str::to_string),
                    on_input: move |v: String| ctl.write().set_field(PlayerField::Nationality, &v),
                }
                FormField {
                    label: "Club",
                    value: form.club.clone(),
                    error: None,
                    on_input: move |v: String| ctl.write().set_field(PlayerField::Club, &v),
                }
                FormField {
                    label: "Positions",
                    value: form.positions.clone(),
                    error: None,
                    on_input: move |v: String| ctl.write().set_field(PlayerField::Positions, &v),
                }
                FormField {
                    label: "Overall",
                    value: form.overall.clone(),
                    error: view.field_error("overall").map(str::to_string),
                    on_input: move |v: String| ctl.write().set_field(PlayerField::Overall, &v),
                }

                button {
                    class: "py-2 rounded bg-blue-600 text-white hover:bg-blue-500",
                    r#type: "submit",
                    "Create"
                }
            }
        }
    }
}

#[component]
fn FormField(
    label: &'static str,
    value: String,
    error: Option<String>,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        label {
            class: "flex flex-col gap-1 text-sm",
            "{label}"
            input {
                class: "border rounded px-3 py-2",
                value: "{value}",
                oninput: move |e| on_input.call(e.value()),
            }
            if let Some(message) = error {
                span { class: "text-red-600", "{message}" }
            }
        }
    }
}
