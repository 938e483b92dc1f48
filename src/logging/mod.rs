//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console logs on stderr
//! - Configurable log levels, overridable with `RUST_LOG`
//! - Local JSON file logging with rotation
//!
//! Logging is a side channel: nothing in the importer or the stores
//! depends on whether it is initialised.
//!
//! # Example
//!
//! ```no_run
//! use roster::logging::init_logging;
//! use roster::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of an import batch
///
/// # Example
///
/// ```no_run
/// use roster::log_import_start;
///
/// log_import_start!(12, "memory");
/// ```
#[macro_export]
macro_rules! log_import_start {
    ($count:expr, $backend:expr) => {
        tracing::info!(records = $count, backend = $backend, "Starting import");
    };
}

/// Log a committed import batch
///
/// # Example
///
/// ```no_run
/// use roster::log_import_complete;
/// use std::time::Duration;
///
/// log_import_complete!(12, 1, Duration::from_millis(40));
/// ```
#[macro_export]
macro_rules! log_import_complete {
    ($added:expr, $renamed:expr, $duration:expr) => {
        tracing::info!(
            added = $added,
            renamed = $renamed,
            duration_ms = $duration.as_millis(),
            "Import completed"
        );
    };
}

/// Log a rejected import batch
///
/// # Example
///
/// ```no_run
/// use roster::log_import_rejected;
///
/// log_import_rejected!("duplicate", 2);
/// ```
#[macro_export]
macro_rules! log_import_rejected {
    ($reason:expr, $error_count:expr) => {
        tracing::warn!(
            reason = $reason,
            errors = $error_count,
            "Import rejected"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use roster::log_error_with_context;
/// use roster::domain::RosterError;
///
/// let error = RosterError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
