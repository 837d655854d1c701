//! Scoutdesk dashboard crate.
//!
//! Admin client for the players API: UI, application logic and
//! infrastructure adapters. Desktop and browser builds are selected with
//! `cfg(target_arch)`.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod state;
pub mod ui;

pub use ui::presentation;
pub use ui::routes;

pub use ui::app;
pub use ui::{use_platform, Route};
