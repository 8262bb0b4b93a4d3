//! Server layer root module.
//!
//! This module organizes the main backend server components, including:
//! - Application state management (dictionary + session store)
//! - HTTP routing
//! - Page handlers (landing, game, highscore pages)
//! - JSON handlers (word checking, score reporting)

pub mod state;
pub mod router;
pub mod sessions;
pub mod messages;
pub mod pages;
pub mod api;
pub mod http_error;
