pub mod http_client;
pub mod platform;

pub mod testing;

/// Spawn a future on the Dioxus runtime.
///
/// Must be called from within a component or a task already running on the
/// Dioxus runtime.
pub fn spawn_task(future: impl std::future::Future<Output = ()> + 'static) {
    dioxus::prelude::spawn(future);
}
