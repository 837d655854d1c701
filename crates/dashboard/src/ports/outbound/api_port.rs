//! HTTP transport errors shared by the API ports.

use thiserror::Error;

/// Failure of a single HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (network, DNS, timeout)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The server answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// Response body could not be decoded
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Request body could not be encoded
    #[error("Failed to serialize request: {0}")]
    SerializeError(String),
}

impl ApiError {
    /// HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Human message from a JSON error body (`{"error": ..}` or `{"message": ..}`).
    pub fn server_message(&self) -> Option<String> {
        let Self::HttpError { body, .. } = self else {
            return None;
        };
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        ["error", "message"]
            .iter()
            .find_map(|key| value.get(key).and_then(|v| v.as_str()))
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_prefers_error_field() {
        let err = ApiError::HttpError {
            status: 401,
            body: r#"{"success":false,"error":"Invalid credentials","message":"x"}"#.into(),
        };
        assert_eq!(err.server_message().as_deref(), Some("Invalid credentials"));
        assert!(err.is_unauthorized());
    }

    #[test]
    fn server_message_absent_for_plain_bodies() {
        let err = ApiError::HttpError {
            status: 500,
            body: "Internal Server Error".into(),
        };
        assert_eq!(err.server_message(), None);
        assert_eq!(err.status(), Some(500));
        assert_eq!(ApiError::RequestFailed("offline".into()).status(), None);
    }
}
