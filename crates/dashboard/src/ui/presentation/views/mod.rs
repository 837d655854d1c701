//! Views - full-page components, one per route

pub mod dashboard;
pub mod login;
pub mod player_detail;
pub mod players;
