//! HTTP adapter for the players/auth REST API
//!
//! Implements `RawApiPort` with `reqwest` on desktop and `gloo-net` in the
//! browser. Non-2xx responses become `ApiError::HttpError` carrying the
//! status and raw body so callers can surface the server's message.

use serde_json::Value;

use crate::ports::outbound::{ApiError, RawApiPort};

/// Client for the players API
#[derive(Clone)]
pub struct ApiAdapter {
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
    base_url: String,
}

impl ApiAdapter {
    /// `timeout_secs` only applies on desktop; browsers manage their own.
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        #[cfg(target_arch = "wasm32")]
        let _ = timeout_secs;

        Self {
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

fn parse_body(text: &str) -> Result<Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| ApiError::ParseError(e.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
mod desktop {
    use super::*;
    use reqwest::{RequestBuilder, Response};

    impl ApiAdapter {
        async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
            let response = request
                .send()
                .await
                .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                tracing::debug!(status = status.as_u16(), "API returned error status");
                return Err(ApiError::HttpError {
                    status: status.as_u16(),
                    body,
                });
            }
            Ok(response)
        }

        async fn send_json(&self, request: RequestBuilder) -> Result<Value, ApiError> {
            let response = self.send(request).await?;
            let text = response
                .text()
                .await
                .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
            parse_body(&text)
        }
    }

    #[async_trait::async_trait]
    impl RawApiPort for ApiAdapter {
        async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
            self.send_json(self.client.get(self.url(path))).await
        }

        async fn get_json_with_token(&self, path: &str, token: &str) -> Result<Value, ApiError> {
            self.send_json(self.client.get(self.url(path)).bearer_auth(token))
                .await
        }

        async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
            let response = self.send(self.client.get(self.url(path))).await?;
            response
                .bytes()
                .await
                .map(|b| b.to_vec())
                .map_err(|e| ApiError::RequestFailed(e.to_string()))
        }

        async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
            self.send_json(self.client.post(self.url(path)).json(body))
                .await
        }

        async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
            self.send_json(self.client.put(self.url(path)).json(body))
                .await
        }

        async fn delete(&self, path: &str) -> Result<(), ApiError> {
            self.send(self.client.delete(self.url(path))).await?;
            Ok(())
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use super::*;
    use gloo_net::http::{Request, RequestBuilder, Response};

    async fn check(response: Response) -> Result<Response, ApiError> {
        if !response.ok() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::HttpError { status, body });
        }
        Ok(response)
    }

    async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        check(response).await
    }

    async fn send_with_body(request: RequestBuilder, body: &Value) -> Result<Value, ApiError> {
        let request = request
            .json(body)
            .map_err(|e| ApiError::SerializeError(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        read_json(check(response).await?).await
    }

    async fn read_json(response: Response) -> Result<Value, ApiError> {
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        parse_body(&text)
    }

    #[async_trait::async_trait(?Send)]
    impl RawApiPort for ApiAdapter {
        async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
            read_json(send(Request::get(&self.url(path))).await?).await
        }

        async fn get_json_with_token(&self, path: &str, token: &str) -> Result<Value, ApiError> {
            let request = Request::get(&self.url(path))
                .header("Authorization", &format!("Bearer {token}"));
            read_json(send(request).await?).await
        }

        async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
            send(Request::get(&self.url(path)))
                .await?
                .binary()
                .await
                .map_err(|e| ApiError::RequestFailed(e.to_string()))
        }

        async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
            send_with_body(Request::post(&self.url(path)), body).await
        }

        async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
            send_with_body(Request::put(&self.url(path)), body).await
        }

        async fn delete(&self, path: &str) -> Result<(), ApiError> {
            send(Request::delete(&self.url(path))).await?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let adapter = ApiAdapter::new("http://localhost:3000/", 5);
        assert_eq!(adapter.base_url(), "http://localhost:3000");
        assert_eq!(
            adapter.url("/api/players"),
            "http://localhost:3000/api/players"
        );
        assert_eq!(
            adapter.url("api/players/search?club=Ajax"),
            "http://localhost:3000/api/players/search?club=Ajax"
        );
    }

    #[test]
    fn empty_body_parses_as_null() {
        assert_eq!(parse_body("  ").unwrap(), Value::Null);
        assert!(matches!(parse_body("{oops"), Err(ApiError::ParseError(_))));
    }
}
