//! Reusable UI components

pub mod header;
pub mod pagination;
pub mod player_badges;
pub mod radar_chart;
