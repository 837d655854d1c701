//! Desktop adapters for the platform ports
//!
//! The session lives in a small JSON file under the OS config directory;
//! exports land in the user's Downloads folder.

use crate::ports::outbound::platform::{
    DocumentProvider, DownloadProvider, NotificationProvider, StorageProvider, TimeProvider,
};
use crate::state::Platform;
use anyhow::Context;
use directories::{ProjectDirs, UserDirs};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use std::time::{SystemTime, UNIX_EPOCH};

type Entries = BTreeMap<String, String>;

#[derive(Clone, Default)]
pub struct DesktopTimeProvider;

impl TimeProvider for DesktopTimeProvider {
    fn now_millis(&self) -> u64 {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
    }
}

/// Key-value storage persisted as `session.json` in the config directory
/// (`~/.config/dashboard` on Linux).
///
/// Every write rewrites the whole file; the map only ever holds the two
/// session entries.
#[derive(Clone)]
pub struct DesktopStorageProvider {
    file: PathBuf,
    entries: Arc<RwLock<Entries>>,
}

impl Default for DesktopStorageProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopStorageProvider {
    pub fn new() -> Self {
        let file = ProjectDirs::from("io", "scoutdesk", "dashboard")
            .map(|dirs| dirs.config_dir().join("session.json"))
            .unwrap_or_else(|| PathBuf::from("scoutdesk_session.json"));
        Self::at(file)
    }

    /// Storage backed by `file`. A missing or unreadable file starts empty.
    pub fn at(file: impl Into<PathBuf>) -> Self {
        let file = file.into();
        let entries = match read_entries(&file) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Ignoring session file {}: {:#}", file.display(), e);
                Entries::new()
            }
        };
        tracing::debug!(path = %file.display(), "Desktop storage ready");
        Self {
            file,
            entries: Arc::new(RwLock::new(entries)),
        }
    }

    /// Apply `change` to the entries and write the result to disk.
    fn update(&self, change: impl FnOnce(&mut Entries)) {
        let snapshot = {
            let mut entries = self
                .entries
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            change(&mut entries);
            entries.clone()
        };
        if let Err(e) = write_entries(&self.file, &snapshot) {
            tracing::error!("Could not persist session: {:#}", e);
        }
    }
}

fn read_entries(file: &Path) -> anyhow::Result<Entries> {
    if !file.exists() {
        return Ok(Entries::new());
    }
    let text = fs::read_to_string(file).context("reading")?;
    serde_json::from_str(&text).context("parsing")
}

fn write_entries(file: &Path, entries: &Entries) -> anyhow::Result<()> {
    if let Some(dir) = file.parent() {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let text = serde_json::to_string_pretty(entries)?;
    fs::write(file, text).with_context(|| format!("writing {}", file.display()))
}

impl StorageProvider for DesktopStorageProvider {
    fn save(&self, key: &str, value: &str) {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        });
    }

    fn load(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(key)
            .cloned()
    }

    fn remove(&self, key: &str) {
        self.update(|entries| {
            entries.remove(key);
        });
    }
}

/// Desktop download provider: writes into the user's Downloads folder
#[derive(Clone)]
pub struct DesktopDownloadProvider {
    target_dir: PathBuf,
}

impl Default for DesktopDownloadProvider {
    fn default() -> Self {
        let target_dir = UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        Self { target_dir }
    }
}

impl DesktopDownloadProvider {
    pub fn into_dir(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
        }
    }
}

impl DownloadProvider for DesktopDownloadProvider {
    fn save_file(&self, file_name: &str, _content_type: &str, bytes: &[u8]) -> anyhow::Result<()> {
        fs::create_dir_all(&self.target_dir)
            .with_context(|| format!("creating {}", self.target_dir.display()))?;
        let path = self.target_dir.join(file_name);
        fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!("Saved download to {}", path.display());
        Ok(())
    }
}

/// Desktop notifications go to the log
#[derive(Clone, Default)]
pub struct DesktopNotificationProvider;

impl NotificationProvider for DesktopNotificationProvider {
    fn alert(&self, message: &str) {
        tracing::warn!(alert = true, "{}", message);
    }
}

/// The window title is fixed at launch, so page titles are only logged.
#[derive(Clone, Default)]
pub struct DesktopDocumentProvider;

impl DocumentProvider for DesktopDocumentProvider {
    fn set_page_title(&self, title: &str) {
        tracing::trace!(title, "Page title");
    }
}

pub fn create_platform() -> Platform {
    Platform::new(
        DesktopTimeProvider,
        DesktopStorageProvider::new(),
        DesktopDownloadProvider::default(),
        DesktopNotificationProvider,
        DesktopDocumentProvider,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let storage = DesktopStorageProvider::at(&path);
        storage.save("scoutdesk_token", "abc");
        storage.save("other", "1");
        storage.remove("other");

        let reloaded = DesktopStorageProvider::at(&path);
        assert_eq!(reloaded.load("scoutdesk_token").as_deref(), Some("abc"));
        assert_eq!(reloaded.load("other"), None);
    }

    #[test]
    fn corrupt_storage_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "{not json").unwrap();

        let storage = DesktopStorageProvider::at(&path);
        assert_eq!(storage.load("anything"), None);
    }

    #[test]
    fn download_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let downloads = DesktopDownloadProvider::into_dir(dir.path());

        downloads
            .save_file("players_2024-01-01.csv", "text/csv", b"id,name\n1,A\n")
            .unwrap();

        let written = fs::read_to_string(dir.path().join("players_2024-01-01.csv")).unwrap();
        assert_eq!(written, "id,name\n1,A\n");
    }
}
