//! Presentation layer - Dioxus components, views and reactive state

pub mod components;
pub mod services;
pub mod state;
pub mod views;

pub use services::{use_services, Services};
