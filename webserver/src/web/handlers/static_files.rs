//! Game page handler
//!
//! Assets under /static are served by `tower_http::services::ServeDir`; this
//! handler only renders the landing page.

use axum::extract::State;
use axum::response::Html;
use shared::app_warn;
use tokio::fs;

use crate::traits::ScoreStorage;
use crate::web::AppState;

/// Page served when `index.html` is missing from the templates directory
pub const FALLBACK_INDEX: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>High Scores</title>
    <style>
        body { font-family: monospace; background: #000; color: #0f0; text-align: center; margin: 50px; }
        li { list-style: none; font-size: 1.4em; margin: 6px 0; }
    </style>
</head>
<body>
    <h1>HIGH SCORES</h1>
    <ol id="highscores-list"></ol>
    <script>
        fetch('/api/highscores')
            .then(response => response.json())
            .then(scores => {
                const list = document.getElementById('highscores-list');
                scores.forEach((entry, index) => {
                    const item = document.createElement('li');
                    item.textContent = `${index + 1}. ${entry.name} ${entry.score.toLocaleString()}`;
                    list.appendChild(item);
                });
            });
    </script>
</body>
</html>"#;

/// `GET /`: the game page
pub async fn serve_index<S>(State(app): State<AppState<S>>) -> Html<String>
where
    S: ScoreStorage + 'static,
{
    let index_path = app.templates_dir.join("index.html");

    match fs::read_to_string(&index_path).await {
        Ok(content) => Html(content),
        Err(e) => {
            app_warn!("Could not read {}: {}, serving fallback page", index_path.display(), e);
            Html(FALLBACK_INDEX.to_string())
        }
    }
}
