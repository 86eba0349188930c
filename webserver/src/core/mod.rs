//! Core business logic modules
//!
//! Storage access goes through the injected `ScoreStorage` trait

pub mod score_store;

// Re-export commonly used types
pub use score_store::HighScoreStore;
