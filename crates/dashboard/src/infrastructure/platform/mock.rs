//! In-memory platform for tests and headless runs.
//!
//! Storage lives in a shared map, time is fixed, and downloads and alerts
//! are recorded instead of reaching the user.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::ports::outbound::platform::{
    DocumentProvider, DownloadProvider, NotificationProvider, StorageProvider, TimeProvider,
};
use crate::state::Platform;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedDownload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Default)]
pub struct MockPlatform {
    now_millis: u64,
    storage: Arc<Mutex<HashMap<String, String>>>,
    downloads: Arc<Mutex<Vec<RecordedDownload>>>,
    alerts: Arc<Mutex<Vec<String>>>,
    titles: Arc<Mutex<Vec<String>>>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the clock to a given instant
    pub fn at_millis(mut self, now_millis: u64) -> Self {
        self.now_millis = now_millis;
        self
    }

    pub fn with_entry(self, key: &str, value: &str) -> Self {
        StorageProvider::save(&self, key, value);
        self
    }

    pub fn downloads(&self) -> Vec<RecordedDownload> {
        self.downloads.lock().map(|d| d.clone()).unwrap_or_default()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().map(|a| a.clone()).unwrap_or_default()
    }

    pub fn titles(&self) -> Vec<String> {
        self.titles.lock().map(|t| t.clone()).unwrap_or_default()
    }

    /// Build a `Platform` whose providers all share this mock's state
    pub fn platform(&self) -> Platform {
        Platform::new(
            self.clone(),
            self.clone(),
            self.clone(),
            self.clone(),
            self.clone(),
        )
    }
}

impl TimeProvider for MockPlatform {
    fn now_millis(&self) -> u64 {
        self.now_millis
    }
}

impl StorageProvider for MockPlatform {
    fn save(&self, key: &str, value: &str) {
        if let Ok(mut storage) = self.storage.lock() {
            storage.insert(key.to_string(), value.to_string());
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.storage.lock().ok()?.get(key).cloned()
    }

    fn remove(&self, key: &str) {
        if let Ok(mut storage) = self.storage.lock() {
            storage.remove(key);
        }
    }
}

impl DownloadProvider for MockPlatform {
    fn save_file(&self, file_name: &str, content_type: &str, bytes: &[u8]) -> anyhow::Result<()> {
        let mut downloads = self
            .downloads
            .lock()
            .map_err(|_| anyhow::anyhow!("download log poisoned"))?;
        downloads.push(RecordedDownload {
            file_name: file_name.to_string(),
            content_type: content_type.to_string(),
            bytes: bytes.to_vec(),
        });
        Ok(())
    }
}

impl NotificationProvider for MockPlatform {
    fn alert(&self, message: &str) {
        if let Ok(mut alerts) = self.alerts.lock() {
            alerts.push(message.to_string());
        }
    }
}

impl DocumentProvider for MockPlatform {
    fn set_page_title(&self, title: &str) {
        if let Ok(mut titles) = self.titles.lock() {
            titles.push(title.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::PlatformPort;

    #[test]
    fn platform_shares_mock_state() {
        let mock = MockPlatform::new()
            .at_millis(1_704_067_200_000)
            .with_entry("scoutdesk_token", "t");
        let platform = mock.platform();

        assert_eq!(platform.storage_load("scoutdesk_token").as_deref(), Some("t"));
        platform.storage_remove("scoutdesk_token");
        assert_eq!(StorageProvider::load(&mock, "scoutdesk_token"), None);

        platform.alert("boom");
        platform.set_page_title("Dashboard");
        platform.save_download("a.csv", "text/csv", b"x").unwrap();

        assert_eq!(mock.alerts(), vec!["boom".to_string()]);
        assert_eq!(mock.titles(), vec!["Dashboard".to_string()]);
        assert_eq!(mock.downloads()[0].file_name, "a.csv");
        assert_eq!(platform.today().to_string(), "2024-01-01");
    }
}
