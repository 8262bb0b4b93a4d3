//! HTTP routing configuration.
//!
//! Defines the page and JSON endpoints of the game server.

use actix_web::web;

use crate::server::api::{check, player_data};
use crate::server::pages::{game_page, highscores_page, landing_page};

/// Configure the application's HTTP routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(landing_page)))
        .service(web::resource("/home").route(web::get().to(game_page)))
        .service(web::resource("/highscores").route(web::get().to(highscores_page)))
        .service(web::resource("/check").route(web::get().to(check)))
        .service(web::resource("/playerdata").route(web::post().to(player_data)));
}
