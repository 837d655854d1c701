//! Application header with navigation and the user menu

use dioxus::prelude::*;

use crate::application::controllers::{shell, ShellModel};
use crate::presentation::services::use_services;
use crate::presentation::state::session_state::use_session_state;
use crate::routes::Route;

#[component]
pub fn Header() -> Element {
    let services = use_services();
    let navigator = use_navigator();
    let auth = use_session_state().auth();

    let model = ShellModel::from_state(&auth.read());

    rsx! {
        header {
            class: "flex items-center justify-between px-6 py-3 bg-gray-900 text-white shadow",

            Link {
                to: Route::DashboardRoute {},
                class: "text-xl font-bold tracking-wide",
                "Scoutdesk"
            }

            {match model {
                ShellModel::SignedOut => rsx! {
                    Link {
                        to: Route::LoginRoute {},
                        class: "px-4 py-2 rounded bg-blue-600 hover:bg-blue-500",
                        "Sign in"
                    }
                },
                ShellModel::SignedIn { username, is_admin } => rsx! {
                    nav {
                        class: "flex items-center gap-4",
                        Link { to: Route::DashboardRoute {}, class: "hover:text-blue-300", "Dashboard" }
                        Link { to: Route::PlayersRoute {}, class: "hover:text-blue-300", "Players" }
                        span {
                            class: "text-gray-300",
                            "{username}"
                            if is_admin {
                                span { class: "ml-2 px-2 py-0.5 text-xs rounded bg-amber-600", "Admin" }
                            }
                        }
                        button {
                            class: "px-3 py-1 rounded bg-gray-700 hover:bg-gray-600",
                            onclick: move |_| {
                                shell::logout(&services.session);
                                navigator.push(Route::LoginRoute {});
                            },
                            "Sign out"
                        }
                    }
                },
            }}
        }
    }
}
