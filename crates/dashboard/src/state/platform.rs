//! `Platform`: the bundle of platform adapters handed to the app.
//!
//! Built once by `infrastructure::platform::create_platform()`, wrapped as
//! `Arc<dyn PlatformPort>` for Dioxus context, and also used directly as the
//! session store's durable storage.

use std::sync::Arc;

use crate::ports::outbound::{
    DocumentProvider, DownloadProvider, NotificationProvider, PlatformPort, StorageProvider,
    TimeProvider,
};

#[derive(Clone)]
pub struct Platform {
    clock: Arc<dyn Clock>,
    storage: Arc<dyn KeyValueStore>,
    downloads: Arc<dyn FileSink>,
    alerts: Arc<dyn AlertSink>,
    document: Arc<dyn TitleSink>,
}

// The port traits require `Clone`, so they are not object safe. These
// private mirrors are, and a blanket impl covers every adapter.

trait Clock: Send + Sync {
    fn now_millis(&self) -> u64;
}

trait KeyValueStore: Send + Sync {
    fn save(&self, key: &str, value: &str);
    fn load(&self, key: &str) -> Option<String>;
    fn remove(&self, key: &str);
}

trait FileSink: Send + Sync {
    fn save_file(&self, file_name: &str, content_type: &str, bytes: &[u8]) -> anyhow::Result<()>;
}

trait AlertSink: Send + Sync {
    fn alert(&self, message: &str);
}

trait TitleSink: Send + Sync {
    fn set_page_title(&self, title: &str);
}

impl<T: TimeProvider + Send + Sync> Clock for T {
    fn now_millis(&self) -> u64 {
        TimeProvider::now_millis(self)
    }
}

impl<T: StorageProvider + Send + Sync> KeyValueStore for T {
    fn save(&self, key: &str, value: &str) {
        StorageProvider::save(self, key, value)
    }
    fn load(&self, key: &str) -> Option<String> {
        StorageProvider::load(self, key)
    }
    fn remove(&self, key: &str) {
        StorageProvider::remove(self, key)
    }
}

impl<T: DownloadProvider + Send + Sync> FileSink for T {
    fn save_file(&self, file_name: &str, content_type: &str, bytes: &[u8]) -> anyhow::Result<()> {
        DownloadProvider::save_file(self, file_name, content_type, bytes)
    }
}

impl<T: NotificationProvider + Send + Sync> AlertSink for T {
    fn alert(&self, message: &str) {
        NotificationProvider::alert(self, message)
    }
}

impl<T: DocumentProvider + Send + Sync> TitleSink for T {
    fn set_page_title(&self, title: &str) {
        DocumentProvider::set_page_title(self, title)
    }
}

impl Platform {
    pub fn new<C, S, D, N, T>(clock: C, storage: S, downloads: D, alerts: N, document: T) -> Self
    where
        C: TimeProvider + Send + Sync,
        S: StorageProvider + Send + Sync,
        D: DownloadProvider + Send + Sync + 'static,
        N: NotificationProvider + Send + Sync + 'static,
        T: DocumentProvider + Send + Sync,
    {
        Self {
            clock: Arc::new(clock),
            storage: Arc::new(storage),
            downloads: Arc::new(downloads),
            alerts: Arc::new(alerts),
            document: Arc::new(document),
        }
    }
}

impl PlatformPort for Platform {
    fn now_millis(&self) -> u64 {
        self.clock.now_millis()
    }

    fn storage_save(&self, key: &str, value: &str) {
        self.storage.save(key, value)
    }

    fn storage_load(&self, key: &str) -> Option<String> {
        self.storage.load(key)
    }

    fn storage_remove(&self, key: &str) {
        self.storage.remove(key)
    }

    fn save_download(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> anyhow::Result<()> {
        self.downloads.save_file(file_name, content_type, bytes)
    }

    fn alert(&self, message: &str) {
        self.alerts.alert(message)
    }

    fn set_page_title(&self, title: &str) {
        self.document.set_page_title(title)
    }
}

impl StorageProvider for Platform {
    fn save(&self, key: &str, value: &str) {
        self.storage.save(key, value)
    }

    fn load(&self, key: &str) -> Option<String> {
        self.storage.load(key)
    }

    fn remove(&self, key: &str) {
        self.storage.remove(key)
    }
}
