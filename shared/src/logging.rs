//! Shared logging utilities for consistent tracing across the workspace

use chrono::{DateTime, Utc};
use tracing::{error, info};

/// Filter directives for the server crates at the given base level
pub fn filter_directives(log_level: &str) -> String {
    format!("highscore_server={log_level},shared={log_level},tower_http=debug,axum={log_level}")
}

/// Initialize the global stdout subscriber
///
/// `RUST_LOG` takes precedence over `log_level` when set.
pub fn init_tracing(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let directives = filter_directives(log_level.unwrap_or("info"));
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directives));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact();

    println!("📊 Log level: {directives}");

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Info logging tagged with the calling crate
#[macro_export]
macro_rules! app_info {
    ($($arg:tt)*) => {
        tracing::info!(
            component = env!("CARGO_CRATE_NAME"),
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        )
    };
}

/// Warning logging tagged with the calling crate
#[macro_export]
macro_rules! app_warn {
    ($($arg:tt)*) => {
        tracing::warn!(
            component = env!("CARGO_CRATE_NAME"),
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        )
    };
}

/// Error logging tagged with the calling crate
#[macro_export]
macro_rules! app_error {
    ($($arg:tt)*) => {
        tracing::error!(
            component = env!("CARGO_CRATE_NAME"),
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        )
    };
}

/// Debug logging tagged with the calling crate
#[macro_export]
macro_rules! app_debug {
    ($($arg:tt)*) => {
        tracing::debug!(
            component = env!("CARGO_CRATE_NAME"),
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        )
    };
}

pub fn log_startup(details: &str) {
    info!(component = "shared", timestamp = format_timestamp(), "🚀 Starting {}", details);
}

pub fn log_shutdown(reason: &str) {
    info!(component = "shared", timestamp = format_timestamp(), "🛑 Shutting down: {}", reason);
}

pub fn log_error(context: &str, error: &dyn std::fmt::Display) {
    error!(
        component = "shared",
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

pub fn log_success(message: &str) {
    info!(component = "shared", timestamp = format_timestamp(), "✅ {}", message);
}
