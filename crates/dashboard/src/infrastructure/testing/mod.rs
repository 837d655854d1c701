//! Test fixtures shared by unit tests.

#[cfg(any(test, feature = "testing"))]
pub mod fixtures;
