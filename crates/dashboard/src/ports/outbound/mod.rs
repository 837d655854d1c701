//! Outbound ports - what the application needs from the outside world
//!
//! HTTP, platform services and chart rendering. Adapters live in
//! `infrastructure`; test doubles in `testing`.

pub mod api_port;
pub mod chart_port;
pub mod platform;
pub mod platform_port;
pub mod raw_api_port;

pub mod testing;

pub use api_port::ApiError;
pub use chart_port::{ChartHandle, ChartRenderer};
pub use platform::{
    storage_keys, DocumentProvider, DownloadProvider, NotificationProvider, StorageProvider,
    TimeProvider,
};
pub use platform_port::PlatformPort;
pub use raw_api_port::RawApiPort;
