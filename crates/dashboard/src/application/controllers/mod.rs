//! View controllers
//!
//! Plain state machines with no UI framework types. Views own one each and
//! forward events to it.

pub mod dashboard;
pub mod login;
pub mod player_detail;
pub mod players;
pub mod shell;

pub use dashboard::{DashboardController, FilterAction, SearchField, SearchForm};
pub use login::{AuthMode, LoginController};
pub use player_detail::{DetailState, PlayerDetailController};
pub use players::{PlayerField, PlayersController};
pub use shell::ShellModel;
