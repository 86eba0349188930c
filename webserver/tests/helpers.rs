//! Test helper utilities for webserver integration tests

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use highscore_server::{JsonFileStorage, ServerConfig, WebServer};
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;
use tower::ServiceExt;

/// Webserver backed by a score file in a fresh temp dir
///
/// The `TempDir` must outlive the server.
pub fn create_test_server() -> (TempDir, WebServer<JsonFileStorage>) {
    let dir = tempfile::tempdir().unwrap();
    let server = create_test_server_in(&dir);
    (dir, server)
}

pub fn create_test_server_in(dir: &TempDir) -> WebServer<JsonFileStorage> {
    let scores_file = scores_path(dir);
    let mut config = ServerConfig::for_scores_file(&scores_file);
    config.static_dir = dir.path().join("static");
    config.templates_dir = dir.path().join("templates");

    WebServer::new(config, JsonFileStorage::new(scores_file))
}

pub fn scores_path(dir: &TempDir) -> PathBuf {
    dir.path().join("highscores.json")
}

/// Read the persisted score file as raw JSON
pub fn read_stored(dir: &TempDir) -> Value {
    let content = std::fs::read_to_string(scores_path(dir)).unwrap();
    serde_json::from_str(&content).unwrap()
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(router, request).await
}

pub async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(router, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

pub async fn post_json(router: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let (status, body) = send(router, request).await;
    (status, serde_json::from_str(&body).unwrap())
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}
