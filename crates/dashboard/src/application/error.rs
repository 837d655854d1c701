//! Service layer error types
//!
//! Errors raised by application services, abstracting over the HTTP
//! transport errors of `ApiError`.

use scoutdesk_domain::DomainError;
use thiserror::Error;

use crate::ports::outbound::ApiError;

/// Errors that can occur in service operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    /// Network failure or non-2xx response
    #[error(transparent)]
    Transport(#[from] ApiError),

    /// The server answered 2xx but reported `success: false`
    #[error("Request rejected: {0}")]
    Rejected(String),

    /// Response was empty when data was expected
    #[error("Server returned empty response")]
    EmptyResponse,

    /// Failed to parse response data
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Operation needs a signed-in session
    #[error("Not authenticated")]
    NotAuthenticated,

    /// A record broke a domain invariant, on the way out or on the way in
    #[error(transparent)]
    Validation(#[from] DomainError),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_not_found())
    }

    pub fn is_unauthorized(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_unauthorized(),
            Self::NotAuthenticated => true,
            _ => false,
        }
    }

    /// Message suitable for showing to the user, preferring the server's own
    /// wording when it sent one.
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::Transport(e) => e.server_message(),
            Self::Rejected(message) if !message.is_empty() => Some(message.clone()),
            Self::Validation(e) => Some(e.to_string()),
            _ => None,
        }
    }
}
