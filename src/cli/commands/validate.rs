//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Roster configuration file.

use super::{EXIT_INPUT, EXIT_OK};
use crate::config::schema::{RosterConfig, StoreBackend};
use crate::config::{load_config, redact_connection_string};
use clap::Args;
use secrecy::ExposeSecret;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates before returning
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(EXIT_INPUT);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        for line in summary(&config) {
            println!("{line}");
        }
        println!();

        Ok(EXIT_OK)
    }
}

/// Human-readable configuration summary, secrets redacted
fn summary(config: &RosterConfig) -> Vec<String> {
    let mut lines = vec![
        "Configuration Summary:".to_string(),
        format!("  Store Backend: {}", config.store_backend.as_str()),
        format!("  Log Level: {}", config.application.log_level),
    ];

    match config.store_backend {
        StoreBackend::Memory => {}
        StoreBackend::File => {
            lines.push(format!("  File Path: {}", config.file_config().path.display()));
        }
        StoreBackend::PostgreSQL => {
            if let Some(ref pg) = config.postgresql {
                lines.push(format!(
                    "  PostgreSQL Connection: {}",
                    redact_connection_string(pg.connection_string.expose_secret().as_str())
                ));
                lines.push(format!("  Max Connections: {}", pg.max_connections));
            }
        }
        StoreBackend::Sqlite => {
            if let Some(ref sqlite) = config.sqlite {
                lines.push(format!("  SQLite URL: {}", sqlite.url));
                lines.push(format!("  Max Connections: {}", sqlite.max_connections));
            }
        }
    }

    lines.push(format!(
        "  Default Page Size: {}",
        config.query.default_page_size
    ));
    lines.push(format!("  Seed Files: {}", config.seed.paths.len()));
    lines.push(format!(
        "  File Logging: {}",
        if config.logging.local_enabled {
            config.logging.local_path.as_str()
        } else {
            "disabled"
        }
    ));

    lines
}
