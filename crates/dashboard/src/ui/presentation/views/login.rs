//! Login / registration view

use dioxus::prelude::*;

use crate::application::controllers::login::{self, AuthMode, LoginController};
use crate::infrastructure::spawn_task;
use crate::presentation::services::use_services;
use crate::presentation::state::session_state::use_session_state;
use crate::routes::Route;

#[component]
pub fn LoginView() -> Element {
    let services = use_services();
    let navigator = use_navigator();
    let auth = use_session_state().auth();
    let mut ctl = use_signal(LoginController::new);

    // Already signed in: skip the form.
    use_effect(move || {
        if LoginController::should_redirect(&auth.read()) {
            navigator.replace(Route::DashboardRoute {});
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Ok(ticket) = ctl.write().begin_submit() else {
            return;
        };
        let session = services.session.clone();
        spawn_task(async move {
            let result = login::run(ticket, &session).await;
            if ctl.write().complete_submit(result) {
                navigator.replace(Route::DashboardRoute {});
            }
        });
    };

    let view = ctl.read().clone();
    let registering = view.mode() == AuthMode::Register;
    let (title, submit_label, toggle_label) = if registering {
        ("Create an account", "Register", "Already have an account? Sign in")
    } else {
        ("Sign in", "Sign in", "No account yet? Register")
    };

    rsx! {
        div {
            class: "flex items-center justify-center min-h-full py-12",
            form {
                class: "w-full max-w-sm bg-white rounded-lg shadow p-6 flex flex-col gap-4",
                onsubmit: on_submit,

                h1 { class: "text-2xl font-semibold", "{title}" }

                if let Some(error) = view.error() {
                    div { class: "p-3 rounded bg-red-100 text-red-700 text-sm", "{error}" }
                }

                if registering {
                    label {
                        class: "flex flex-col gap-1",
                        "Username"
                        input {
                            class: "border rounded px-3 py-2",
                            r#type: "text",
                            value: "{view.username()}",
                            oninput: move |e| ctl.write().set_username(&e.value()),
                        }
                        if let Some(message) = view.field_error("username") {
                            span { class: "text-red-600 text-sm", "{message}" }
                        }
                    }
                }

                label {
                    class: "flex flex-col gap-1",
                    "Email"
                    input {
                        class: "border rounded px-3 py-2",
                        r#type: "email",
                        value: "{view.email()}",
                        oninput: move |e| ctl.write().set_email(&e.value()),
                    }
                    if let Some(message) = view.field_error("email") {
                        span { class: "text-red-600 text-sm", "{message}" }
                    }
                }

                label {
                    class: "flex flex-col gap-1",
                    "Password"
                    input {
                        class: "border rounded px-3 py-2",
                        r#type: "password",
                        value: "{view.password()}",
                        oninput: move |e| ctl.write().set_password(&e.value()),
                    }
                    if let Some(message) = view.field_error("password") {
                        span { class: "text-red-600 text-sm", "{message}" }
                    }
                }

                button {
                    class: "py-2 rounded bg-blue-600 text-white hover:bg-blue-500 disabled:opacity-50",
                    r#type: "submit",
                    disabled: view.is_loading(),
                    if view.is_loading() { "Please wait..." } else { "{submit_label}" }
                }

                button {
                    class: "text-sm text-blue-700 hover:underline",
                    r#type: "button",
                    onclick: move |_| ctl.write().toggle_mode(),
                    "{toggle_label}"
                }
            }
        }
    }
}
