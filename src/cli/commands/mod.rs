//! CLI command implementations
//!
//! Every command returns its process exit code. Results meant for other
//! programs (JSON, listings) go to stdout; diagnostics go to stderr.

pub mod get;
pub mod import;
pub mod init;
pub mod list;
pub mod validate;

use crate::adapters::database::{open_store, EmployeeStore};
use crate::config::{load_config, RosterConfig};
use crate::domain::{RosterError, StoreError};
use std::sync::Arc;

/// Success
pub const EXIT_OK: i32 = 0;
/// Import rejected or record not found
pub const EXIT_REJECTED: i32 = 1;
/// Configuration or input error
pub const EXIT_INPUT: i32 = 2;
/// Store could not be reached
pub const EXIT_CONNECTION: i32 = 4;
/// Anything else
pub const EXIT_FATAL: i32 = 5;

/// Maps an error to the exit code reported for it
pub fn exit_code_for(error: &RosterError) -> i32 {
    match error {
        RosterError::Configuration(_) | RosterError::Validation(_) | RosterError::Parse(_) => {
            EXIT_INPUT
        }
        RosterError::NotFound(_) => EXIT_REJECTED,
        RosterError::Store(StoreError::ConnectionFailed(_)) => EXIT_CONNECTION,
        _ => EXIT_FATAL,
    }
}

/// Loads configuration and opens the configured store
///
/// On failure the error is reported on stderr and the exit code returned
/// as `Err`.
pub(crate) async fn open_configured_store(
    config_path: &str,
) -> Result<(RosterConfig, Arc<dyn EmployeeStore>), i32> {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("❌ Failed to load configuration file");
            eprintln!("   Error: {e}");
            return Err(EXIT_INPUT);
        }
    };

    match open_store(&config).await {
        Ok(store) => Ok((config, store)),
        Err(e) => {
            crate::log_error_with_context!(&e, "Failed to open store");
            eprintln!("❌ Failed to open {} store", config.store_backend.as_str());
            eprintln!("   Error: {e}");
            Err(exit_code_for(&e))
        }
    }
}
