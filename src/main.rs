//! Main entry point for the backend server.
//!
//! Loads the dictionary, configures application state, and launches the HTTP
//! server with the page and word-check endpoints.

use actix_web::{web, App, HttpServer};
use log::info;

use game::words::Dictionary;

pub mod config;
mod server;
mod game;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::init();

    // Load the word list once, before binding; a missing dictionary is fatal.
    let dictionary = Dictionary::load_default()
        .map_err(std::io::Error::other)?;
    info!("dictionary loaded: {} words", dictionary.len());

    // Shared application state for HTTP handlers.
    let state = web::Data::new(server::state::AppState::new(dictionary));

    // Start the HTTP server with the game endpoints.
    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*"))
            )
            .app_data(state.clone())
            .configure(crate::server::router::config)
    })
    .bind(config::server::BIND_ADDR)?
    .run()
    .await
}
