//! REST API handlers
//!
//! HTTP endpoints for listing and submitting high scores

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::Json;
use chrono::Utc;
use serde_json::{Value, json};
use shared::ScoreEntry;

use crate::error::{WebServerError, WebServerResult};
use crate::traits::ScoreStorage;
use crate::types::{SubmitRequest, SubmitResponse};
use crate::web::AppState;

/// `GET /api/highscores`: the leaderboard, best first
pub async fn list_highscores<S>(State(app): State<AppState<S>>) -> WebServerResult<Json<Vec<ScoreEntry>>>
where
    S: ScoreStorage + 'static,
{
    let scores = app.store.top().await?;
    Ok(Json(scores))
}

/// `POST /api/highscores`: record a score and report its rank
pub async fn submit_highscore<S>(
    State(app): State<AppState<S>>,
    payload: Result<Json<SubmitRequest>, JsonRejection>,
) -> WebServerResult<Json<SubmitResponse>>
where
    S: ScoreStorage + 'static,
{
    let Json(request) = payload.map_err(|rejection| WebServerError::invalid_request(rejection.body_text()))?;

    let entry = request.into_entry()?;
    let placement = app.store.submit(entry).await?;
    app.server.record_submission();

    Ok(Json(SubmitResponse {
        success: true,
        rank: placement.rank(),
    }))
}

/// `GET /health`
pub async fn health_check<S>(State(app): State<AppState<S>>) -> Json<Value>
where
    S: ScoreStorage + 'static,
{
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().timestamp(),
        "uptime": app.server.get_uptime_seconds(),
        "submissions": app.server.get_submission_count(),
    }))
}
