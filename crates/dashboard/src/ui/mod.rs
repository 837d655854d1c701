use crate::infrastructure::spawn_task;
use crate::ports::outbound::PlatformPort;
use dioxus::prelude::*;
use futures_util::StreamExt;
use std::sync::Arc;

pub mod presentation;
pub mod routes;

pub use routes::Route;

/// Type alias for the platform port used throughout the UI
pub type PlatformHandle = Arc<dyn PlatformPort>;

/// Hook to access the platform from Dioxus context
pub fn use_platform() -> PlatformHandle {
    use_context::<PlatformHandle>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/dashboard/src/main.rs`).
    let services = use_context::<presentation::Services>();

    let mut session_state = use_context_provider(|| {
        presentation::state::SessionState::new(services.session.current_state())
    });

    // Mirror every session transition into the signal the views read.
    use_hook(move || {
        let mut changes = services.session.state_changes();
        spawn_task(async move {
            while let Some(state) = changes.next().await {
                session_state.set(state);
            }
        });

        // A restored token may have expired; a rejected one signs out.
        if services.session.current_state().is_authenticated() {
            let session = services.session.clone();
            spawn_task(async move {
                if let Err(e) = session.verify_session().await {
                    tracing::info!("Stored session rejected: {}", e);
                }
            });
        }
    });

    rsx! {
        document::Stylesheet {
            href: asset!("/assets/css/dashboard.css"),
        }

        div {
            class: "app-root",
            Router::<routes::Route> {}
        }
    }
}
