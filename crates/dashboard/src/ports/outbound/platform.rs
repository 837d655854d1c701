//! Platform ports: clock, storage, downloads, alerts and page title.
//!
//! Desktop and browser adapters live in `infrastructure::platform`;
//! `state::Platform` bundles one of each.

pub trait TimeProvider: Clone + 'static {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> u64;
}

/// Synchronous string key-value storage (`localStorage` or a file).
pub trait StorageProvider: Clone + 'static {
    fn save(&self, key: &str, value: &str);
    fn load(&self, key: &str) -> Option<String>;
    fn remove(&self, key: &str);
}

/// Hands a generated file to the user (browser download / Downloads folder)
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait DownloadProvider {
    fn save_file(&self, file_name: &str, content_type: &str, bytes: &[u8]) -> anyhow::Result<()>;
}

/// User-visible, blocking notifications
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait NotificationProvider {
    fn alert(&self, message: &str);
}

pub trait DocumentProvider: Clone + 'static {
    /// Browser tab title; desktop adapters may ignore it.
    fn set_page_title(&self, title: &str);
}

/// The durable session is exactly these two entries.
pub mod storage_keys {
    /// Bearer token (plain string)
    pub const TOKEN: &str = "scoutdesk_token";
    /// Signed-in user (JSON object)
    pub const USER: &str = "scoutdesk_user";
}
