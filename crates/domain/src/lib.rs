//! Scoutdesk domain layer.
//!
//! Pure data model and pure functions shared by the dashboard client:
//! player records, search filters, authentication state, pagination math,
//! radar chart layout and form validation. Nothing in here performs I/O.

pub mod auth;
pub mod error;
pub mod export;
pub mod filters;
pub mod forms;
pub mod pagination;
pub mod player;
pub mod radar;

pub use auth::{AuthState, Role, User};
pub use error::DomainError;
pub use export::{export_file_name, CSV_CONTENT_TYPE};
pub use filters::PlayerFilters;
pub use forms::{FieldErrors, LoginForm, PlayerDraft, PlayerFormInput, RegisterForm};
pub use pagination::{page_bounds, page_slice, page_window, total_pages, DEFAULT_PAGE_SIZE};
pub use player::{position_class, OverallTier, Player, PlayerListResult, POSITION_OPTIONS};
pub use radar::{RadarChartSpec, RadarGeometry, RadarPoint, SkillAttribute, SkillCategory};
