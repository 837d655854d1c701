//! Scoutdesk Dashboard - composition root binary.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scoutdesk_dashboard::application::services::{AuthService, PlayerService, SessionStore};
use scoutdesk_dashboard::application::Api;
use scoutdesk_dashboard::config::AppConfig;
use scoutdesk_dashboard::infrastructure::http_client::ApiAdapter;
use scoutdesk_dashboard::ports::outbound::{PlatformPort, RawApiPort};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scoutdesk_dashboard=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    let config = AppConfig::from_env();
    tracing::info!(api = %config.api_base_url, "Starting Scoutdesk Dashboard");

    // Platform
    let platform = scoutdesk_dashboard::infrastructure::platform::create_platform();
    let platform_port: Arc<dyn PlatformPort> = Arc::new(platform.clone());

    // HTTP
    let raw_api: Arc<dyn RawApiPort> = Arc::new(ApiAdapter::new(
        &config.api_base_url,
        config.request_timeout_secs,
    ));
    let api = Api::new(raw_api);

    // Session: restore before the first route is evaluated
    let session = SessionStore::new(platform, AuthService::new(api.clone()));
    session.restore_at_startup();

    let services = scoutdesk_dashboard::presentation::Services::new(
        PlayerService::new(api),
        session,
        config.page_size,
    );

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let head = format!("<style>{}</style>", load_dashboard_css());
        let cfg = dioxus_desktop::Config::new()
            .with_custom_head(head)
            .with_window(dioxus_desktop::WindowBuilder::new().with_title("Scoutdesk"));
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform_port)
        .with_context(services)
        .launch(scoutdesk_dashboard::ui::app);
}

#[cfg(not(target_arch = "wasm32"))]
fn load_dashboard_css() -> String {
    let css_path =
        std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/css/dashboard.css");
    std::fs::read_to_string(css_path).unwrap_or_default()
}
