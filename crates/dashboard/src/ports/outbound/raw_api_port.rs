//! Raw API Port - Object-safe HTTP boundary
//!
//! Paths are relative to the configured API base URL and may carry an
//! already-encoded query string. `Api` in the application layer provides the
//! typed wrapper on top of this port.

use serde_json::Value;

use super::ApiError;

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait RawApiPort: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    /// GET with an `Authorization: Bearer <token>` header
    async fn get_json_with_token(&self, path: &str, token: &str) -> Result<Value, ApiError>;

    /// GET returning the raw response body (CSV export)
    async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    /// DELETE; any 2xx body is treated as an acknowledgement
    async fn delete(&self, path: &str) -> Result<(), ApiError>;
}
