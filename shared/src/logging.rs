//! Shared logging utilities for consistent tracing across the workspace

use crate::types::SessionId;
use chrono::{DateTime, Utc};
use tracing::{error, info};

/// Build the filter directive used when `RUST_LOG` is not set
pub fn default_filter(log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");
    format!("quoter={base_level},shared={base_level},reqwest=warn,hyper=warn")
}

/// Initialize tracing subscriber with an explicit log level
///
/// Logs go to stderr; stdout is reserved for command output.
/// `RUST_LOG` overrides the computed filter when present.
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(log_level)));

    // try_init so tests and repeated calls don't panic
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for session-aware info logging
#[macro_export]
macro_rules! session_info {
    ($($arg:tt)*) => {
        tracing::info!(
            session = %$crate::SessionId::current(),
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for session-aware warning logging
#[macro_export]
macro_rules! session_warn {
    ($($arg:tt)*) => {
        tracing::warn!(
            session = %$crate::SessionId::current(),
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for session-aware error logging
#[macro_export]
macro_rules! session_error {
    ($($arg:tt)*) => {
        tracing::error!(
            session = %$crate::SessionId::current(),
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for session-aware debug logging
#[macro_export]
macro_rules! session_debug {
    ($($arg:tt)*) => {
        tracing::debug!(
            session = %$crate::SessionId::current(),
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(session_id: &SessionId, details: &str) {
    info!(
        session = %session_id,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(session_id: &SessionId, context: &str, error: &dyn std::fmt::Display) {
    error!(
        session = %session_id,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}
