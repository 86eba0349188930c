//! Lifecycle tests for the WebServer

mod helpers;

use highscore_server::{JsonFileStorage, ServerConfig, WebServer, WebServerError};
use shared::ScoreLimits;

use helpers::*;

#[tokio::test]
async fn test_webserver_creation() {
    let (_dir, server) = create_test_server();

    assert!(server.state().is_running());
    assert_eq!(server.state().get_submission_count(), 0);
    assert_eq!(server.store().limits(), ScoreLimits::default());
    assert_eq!(server.config().bind_address.ip().to_string(), "127.0.0.1");
}

#[tokio::test]
async fn test_run_stops_on_shutdown_signal() {
    let (_dir, server) = create_test_server();

    server.run(async {}).await.unwrap();

    assert!(!server.state().is_running());
}

#[tokio::test]
async fn test_run_fails_when_port_is_taken() {
    let dir = tempfile::tempdir().unwrap();
    let occupied = std::net::TcpListener::bind("127.0.0.1:0").unwrap();

    let mut config = ServerConfig::for_scores_file(scores_path(&dir));
    config.bind_address = occupied.local_addr().unwrap();
    let server = WebServer::new(config, JsonFileStorage::new(scores_path(&dir)));

    let result = server.run(async {}).await;

    assert!(matches!(result, Err(WebServerError::ServerStartup(_))));
}

#[tokio::test]
async fn test_custom_limits_flow_into_store() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = ServerConfig::for_scores_file(scores_path(&dir));
    config.limits = ScoreLimits::new(3, 2).unwrap();
    let server = WebServer::new(config, JsonFileStorage::new(scores_path(&dir)));
    let router = server.build_router();

    let (_, listed) = get_json(&router, "/api/highscores").await;
    assert_eq!(listed.as_array().unwrap().len(), 2);

    let (_, body) = post_json(&router, "/api/highscores", r#"{"name": "low", "score": 1}"#).await;
    assert!(body["rank"].is_null());
    assert_eq!(read_stored(&dir).as_array().unwrap().len(), 3);
}
