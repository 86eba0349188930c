//! High score web service
//!
//! Serves the game page and a small REST API that ranks submitted scores and
//! persists the leaderboard to a JSON file.

pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use config::{Args, ServerConfig};
pub use crate::core::HighScoreStore;
pub use error::{WebServerError, WebServerResult};
pub use state::WebServerState;
pub use types::*;
pub use webserver_impl::WebServer;

// Re-export trait definitions
pub use traits::ScoreStorage;

// Re-export service implementations
pub use services::JsonFileStorage;
