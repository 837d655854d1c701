//! Platform adapters, chosen per target at compile time.

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

#[cfg(any(test, feature = "testing"))]
pub mod mock;

#[cfg(target_arch = "wasm32")]
pub use wasm::{
    create_platform, WasmDocumentProvider, WasmDownloadProvider, WasmNotificationProvider,
    WasmStorageProvider, WasmTimeProvider,
};

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::{
    create_platform, DesktopDocumentProvider, DesktopDownloadProvider,
    DesktopNotificationProvider, DesktopStorageProvider, DesktopTimeProvider,
};
