//! Simple test fixtures used across unit tests.

use serde_json::{json, Value};

use scoutdesk_domain::{Player, Role, User};

use crate::ports::outbound::ApiError;

pub fn api_request_failed(msg: &str) -> ApiError {
    ApiError::RequestFailed(msg.to_string())
}

pub fn api_http_error(status: u16, body: Value) -> ApiError {
    ApiError::HttpError {
        status,
        body: body.to_string(),
    }
}

/// `count` numbered players: "Player 1" .. "Player <count>", ids from 1
pub fn numbered_players(count: u64) -> Vec<Player> {
    (1..=count)
        .map(|i| {
            Player::new(format!("Player {i}"), 24, "Spain", 75)
                .with_id(i)
                .with_club("Test FC")
                .with_positions("CM")
        })
        .collect()
}

pub fn real_madrid_players() -> Vec<Player> {
    vec![
        Player::new("Jude Bellingham", 20, "England", 86)
            .with_id(101)
            .with_club("Real Madrid")
            .with_positions("CM, CAM"),
        Player::new("Vinícius José Paixão de Oliveira Júnior", 23, "Brazil", 89)
            .with_id(102)
            .with_club("Real Madrid")
            .with_positions("LW"),
    ]
}

pub fn skilled_player() -> Player {
    let mut player = Player::new("Kylian Mbappé Lottin", 25, "France", 91)
        .with_id(7)
        .with_club("Paris Saint Germain")
        .with_positions("ST, LW");
    player.pace = Some(97);
    player.shooting = Some(90);
    player.passing = Some(80);
    player.dribbling = Some(92);
    player.defending = Some(36);
    player.physical = Some(78);
    player
}

/// `{success, count, data}` list envelope
pub fn list_envelope(players: &[Player]) -> Value {
    json!({
        "success": true,
        "count": players.len(),
        "data": players,
    })
}

/// `{success, data}` single-record envelope
pub fn player_envelope(player: &Player) -> Value {
    json!({ "success": true, "data": player })
}

pub fn admin_user() -> User {
    User {
        id: 1,
        username: "admin".into(),
        email: "admin@scoutdesk.io".into(),
        role: Role::Admin,
    }
}

pub fn scout_user() -> User {
    User {
        id: 2,
        username: "scout".into(),
        email: "scout@scoutdesk.io".into(),
        role: Role::User,
    }
}

/// `{success, message, data: {user, token}}` auth envelope
pub fn auth_envelope(user: &User, token: &str) -> Value {
    json!({
        "success": true,
        "message": "ok",
        "data": { "user": user, "token": token },
    })
}
