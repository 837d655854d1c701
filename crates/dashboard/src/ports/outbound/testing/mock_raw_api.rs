//! Scripted `RawApiPort` for tests.
//!
//! Responses are served in the order they were queued, whatever the path.
//! Every call is recorded so tests can assert on what went over the wire.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use serde_json::Value;

use crate::ports::outbound::{ApiError, RawApiPort};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
    pub token: Option<String>,
}

impl RecordedRequest {
    /// Path without the query string
    pub fn route(&self) -> &str {
        self.path.split('?').next().unwrap_or(&self.path)
    }

    /// Decoded query pairs, in wire order
    pub fn query(&self) -> Vec<(String, String)> {
        match self.path.split_once('?') {
            Some((_, query)) => url::form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect(),
            None => Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
enum Scripted {
    Json(Value),
    Bytes(Vec<u8>),
    Error(ApiError),
}

#[derive(Clone, Default)]
pub struct MockRawApi {
    responses: Arc<Mutex<VecDeque<Scripted>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockRawApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_json(&self, value: Value) -> &Self {
        self.push(Scripted::Json(value))
    }

    pub fn push_bytes(&self, bytes: impl Into<Vec<u8>>) -> &Self {
        self.push(Scripted::Bytes(bytes.into()))
    }

    pub fn push_error(&self, error: ApiError) -> &Self {
        self.push(Scripted::Error(error))
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).last().cloned()
    }

    fn push(&self, scripted: Scripted) -> &Self {
        self.responses.lock().unwrap_or_else(PoisonError::into_inner).push_back(scripted);
        self
    }

    fn record(
        &self,
        method: &'static str,
        path: &str,
        body: Option<&Value>,
        token: Option<&str>,
    ) -> Result<Scripted, ApiError> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).push(RecordedRequest {
            method,
            path: path.to_string(),
            body: body.cloned(),
            token: token.map(str::to_string),
        });
        let next = self.responses.lock().unwrap_or_else(PoisonError::into_inner).pop_front();
        match next {
            Some(Scripted::Error(e)) => Err(e),
            Some(other) => Ok(other),
            None => Err(ApiError::RequestFailed(format!(
                "no scripted response for {method} {path}"
            ))),
        }
    }

    fn expect_json(scripted: Scripted) -> Result<Value, ApiError> {
        match scripted {
            Scripted::Json(v) => Ok(v),
            Scripted::Bytes(b) => {
                serde_json::from_slice(&b).map_err(|e| ApiError::ParseError(e.to_string()))
            }
            Scripted::Error(e) => Err(e),
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl RawApiPort for MockRawApi {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        Self::expect_json(self.record("GET", path, None, None)?)
    }

    async fn get_json_with_token(&self, path: &str, token: &str) -> Result<Value, ApiError> {
        Self::expect_json(self.record("GET", path, None, Some(token))?)
    }

    async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        match self.record("GET", path, None, None)? {
            Scripted::Bytes(b) => Ok(b),
            Scripted::Json(v) => Ok(v.to_string().into_bytes()),
            Scripted::Error(e) => Err(e),
        }
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        Self::expect_json(self.record("POST", path, Some(body), None)?)
    }

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        Self::expect_json(self.record("PUT", path, Some(body), None)?)
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.record("DELETE", path, None, None).map(|_| ())
    }
}
