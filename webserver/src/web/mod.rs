//! HTTP layer: shared handler state and route handlers

pub mod handlers;

use std::path::PathBuf;
use std::sync::Arc;

use crate::core::HighScoreStore;
use crate::state::WebServerState;
use crate::traits::ScoreStorage;

/// State handed to every handler
pub struct AppState<S: ScoreStorage> {
    pub store: Arc<HighScoreStore<S>>,
    pub server: Arc<WebServerState>,
    pub templates_dir: Arc<PathBuf>,
}

// Manual impl: cloning only bumps the Arcs, so S itself need not be Clone
impl<S: ScoreStorage> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            server: Arc::clone(&self.server),
            templates_dir: Arc::clone(&self.templates_dir),
        }
    }
}
