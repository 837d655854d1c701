//! Router definition and route handlers
//!
//! Route handlers set the page title and render a view. Everything under
//! `ProtectedLayout` requires a signed-in session.

use dioxus::prelude::*;

mod dashboard;
mod layout;
mod login;
mod not_found;
mod player_detail;
mod players;

use dashboard::DashboardRoute;
use layout::{AppShell, ProtectedLayout};
use login::LoginRoute;
use not_found::NotFoundRoute;
use player_detail::PlayerDetailRoute;
use players::PlayersRoute;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
        #[redirect("/", || Route::DashboardRoute {})]
        #[route("/login")]
        LoginRoute {},

        #[layout(ProtectedLayout)]
            #[route("/dashboard")]
            DashboardRoute {},
            #[route("/players")]
            PlayersRoute {},
            #[route("/players/:id")]
            PlayerDetailRoute { id: String },
        #[end_layout]

        #[route("/:..segments")]
        NotFoundRoute { segments: Vec<String> },
}
