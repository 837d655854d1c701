//! Reactive UI state
//!
//! Signals that mirror application state so components re-render when it
//! changes.

pub mod session_state;

pub use session_state::SessionState;
