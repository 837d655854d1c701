//! Object-safe view of the platform for UI code and controllers.

use chrono::{DateTime, NaiveDate, Utc};

/// Implemented by `state::Platform`; provided to components as
/// `Arc<dyn PlatformPort>` (see `ui::use_platform`).
pub trait PlatformPort: Send + Sync {
    fn now_millis(&self) -> u64;

    /// Current UTC calendar date
    fn today(&self) -> NaiveDate {
        let millis = i64::try_from(self.now_millis()).unwrap_or(i64::MAX);
        DateTime::<Utc>::from_timestamp_millis(millis)
            .unwrap_or_default()
            .date_naive()
    }

    fn storage_save(&self, key: &str, value: &str);
    fn storage_load(&self, key: &str) -> Option<String>;
    fn storage_remove(&self, key: &str);

    /// Offer `bytes` to the user as a file named `file_name`
    fn save_download(&self, file_name: &str, content_type: &str, bytes: &[u8])
        -> anyhow::Result<()>;

    fn alert(&self, message: &str);

    fn set_page_title(&self, title: &str);
}
