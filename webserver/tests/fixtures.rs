//! Test fixtures for webserver integration tests

use serde_json::{Value, json};

/// Submission body for a player
pub fn submission(name: &str, score: i64) -> String {
    json!({ "name": name, "score": score }).to_string()
}

/// Submission body carrying every optional field
pub fn full_submission(name: &str, score: i64, level: i64, difficulty: &str) -> String {
    json!({
        "name": name,
        "score": score,
        "level": level,
        "difficulty": difficulty,
    })
    .to_string()
}

/// Scores of the seed leaderboard, best first
pub fn default_score_values() -> Vec<i64> {
    vec![10000, 8500, 7200, 6000, 4500]
}

pub fn scores_of(entries: &Value) -> Vec<i64> {
    entries
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["score"].as_i64().unwrap())
        .collect()
}
