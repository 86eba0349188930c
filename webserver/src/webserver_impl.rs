//! Main webserver implementation
//!
//! Wires the score store, the static assets and the HTTP routes together
//! using dependency injection for the storage backend.

use axum::Router;
use axum::routing::get;
use std::future::Future;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::core::HighScoreStore;
use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::traits::ScoreStorage;
use crate::web::AppState;
use crate::web::handlers::{api, static_files};

/// Main webserver struct with dependency injection
pub struct WebServer<S: ScoreStorage> {
    config: ServerConfig,
    state: Arc<WebServerState>,
    store: Arc<HighScoreStore<S>>,
}

impl<S> WebServer<S>
where
    S: ScoreStorage + 'static,
{
    /// Create a new webserver around an injected storage backend
    pub fn new(config: ServerConfig, storage: S) -> Self {
        let state = Arc::new(WebServerState::new(config.bind_address));
        let store = Arc::new(HighScoreStore::with_limits(storage, config.limits));

        Self { config, state, store }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        let app_state = AppState {
            store: Arc::clone(&self.store),
            server: Arc::clone(&self.state),
            templates_dir: Arc::new(self.config.templates_dir.clone()),
        };

        Router::new()
            .route("/", get(static_files::serve_index::<S>))
            .route(
                "/api/highscores",
                get(api::list_highscores::<S>).post(api::submit_highscore::<S>),
            )
            .route("/health", get(api::health_check::<S>))
            .nest_service("/static", ServeDir::new(&self.config.static_dir))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive()),
            )
            .with_state(app_state)
    }

    /// Serve until `shutdown` resolves
    pub async fn run<F>(&self, shutdown: F) -> WebServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.build_router();
        let bind_address = self.config.bind_address;

        let listener = tokio::net::TcpListener::bind(bind_address)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {bind_address}: {e}")))?;

        shared::app_info!("🌐 Web server listening on http://{}", bind_address);
        shared::app_info!("💾 High scores stored in {}", self.store.storage().location());

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Server error: {e}")))?;

        self.state.set_running(false);
        Ok(())
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get server state for external access
    pub fn state(&self) -> &Arc<WebServerState> {
        &self.state
    }

    pub fn store(&self) -> &Arc<HighScoreStore<S>> {
        &self.store
    }
}
