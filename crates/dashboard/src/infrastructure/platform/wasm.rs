//! WASM platform implementations
//!
//! Browser-backed providers built on `web_sys` and `js_sys`.

use crate::ports::outbound::platform::{
    DocumentProvider, DownloadProvider, NotificationProvider, StorageProvider, TimeProvider,
};
use crate::state::Platform;
use anyhow::anyhow;
use wasm_bindgen::JsCast;

/// WASM time provider using the JS clock
#[derive(Clone, Default)]
pub struct WasmTimeProvider;

impl TimeProvider for WasmTimeProvider {
    fn now_millis(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}

/// localStorage-backed storage
#[derive(Clone, Default)]
pub struct WasmStorageProvider;

impl WasmStorageProvider {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl StorageProvider for WasmStorageProvider {
    fn save(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, dropping write of {}", key);
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::error!("Failed to write {} to localStorage", key);
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if storage.remove_item(key).is_err() {
                tracing::error!("Failed to remove {} from localStorage", key);
            }
        }
    }
}

/// Triggers a browser download through a temporary object URL
#[derive(Clone, Default)]
pub struct WasmDownloadProvider;

impl DownloadProvider for WasmDownloadProvider {
    fn save_file(&self, file_name: &str, content_type: &str, bytes: &[u8]) -> anyhow::Result<()> {
        let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
        let document = window.document().ok_or_else(|| anyhow!("no document"))?;

        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(content_type);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|e| anyhow!("blob creation failed: {:?}", e))?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)
            .map_err(|e| anyhow!("object url failed: {:?}", e))?;

        let anchor = document
            .create_element("a")
            .map_err(|e| anyhow!("anchor creation failed: {:?}", e))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| anyhow!("element is not an anchor"))?;
        anchor.set_href(&url);
        anchor.set_download(file_name);

        let body = document.body().ok_or_else(|| anyhow!("no body"))?;
        body.append_child(&anchor)
            .map_err(|e| anyhow!("append failed: {:?}", e))?;
        anchor.click();
        let _ = body.remove_child(&anchor);
        let _ = web_sys::Url::revoke_object_url(&url);
        Ok(())
    }
}

/// `window.alert`
#[derive(Clone, Default)]
pub struct WasmNotificationProvider;

impl NotificationProvider for WasmNotificationProvider {
    fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if window.alert_with_message(message).is_err() {
                    tracing::warn!("alert failed: {}", message);
                }
            }
            None => tracing::warn!("alert without window: {}", message),
        }
    }
}

/// WASM document provider
#[derive(Clone, Default)]
pub struct WasmDocumentProvider;

impl DocumentProvider for WasmDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }
}

/// Create platform services for the browser
pub fn create_platform() -> Platform {
    Platform::new(
        WasmTimeProvider,
        WasmStorageProvider,
        WasmDownloadProvider,
        WasmNotificationProvider,
        WasmDocumentProvider,
    )
}
