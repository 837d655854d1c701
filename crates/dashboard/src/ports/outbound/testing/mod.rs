//! Test doubles for the outbound ports (`testing` feature or unit tests).

#[cfg(any(test, feature = "testing"))]
mod mock_raw_api;

#[cfg(any(test, feature = "testing"))]
pub use mock_raw_api::{MockRawApi, RecordedRequest};
