//! Shared types for the high score service
//!
//! Contains the score domain model, the pure ranking rules applied to it,
//! and the logging setup used by every binary in the workspace.

pub mod errors;
pub mod logging;
pub mod ranking;
pub mod types;

pub use errors::*;
pub use ranking::{Placement, ScoreLimits};
pub use types::*;
