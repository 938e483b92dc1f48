//! Store factory
//!
//! This module provides factory functions to create the configured store.

use crate::adapters::database::traits::EmployeeStore;
use crate::adapters::file::FileEmployeeStore;
use crate::adapters::memory::MemoryEmployeeStore;
use crate::adapters::postgresql::adapter::PostgreSQLAdapter;
use crate::adapters::postgresql::client::PostgreSQLClient;
use crate::adapters::sqlite::SqliteAdapter;
use crate::config::schema::{RosterConfig, StoreBackend};
use crate::core::import::ImportReconciler;
use crate::core::parse::{UploadFile, UploadPayload};
use crate::domain::{Result, RosterError};
use std::sync::Arc;

/// Create a store based on the configuration
///
/// This factory function examines `store_backend` in the configuration and
/// opens the matching implementation. Relational backends are connected
/// and their schema created before this returns.
///
/// # Errors
///
/// Returns an error if the selected backend's section is missing or the
/// store cannot be opened.
pub async fn create_employee_store(config: &RosterConfig) -> Result<Arc<dyn EmployeeStore>> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::info!("Creating in-memory store");
            Ok(Arc::new(MemoryEmployeeStore::new()))
        }
        StoreBackend::File => {
            let file_config = config.file_config();
            tracing::info!(path = %file_config.path.display(), "Creating file store");
            Ok(Arc::new(FileEmployeeStore::open(file_config.path).await?))
        }
        StoreBackend::PostgreSQL => {
            let pg_config = config.postgresql.as_ref().ok_or_else(|| {
                RosterError::Configuration(
                    "postgresql configuration is required when store_backend = 'postgresql'"
                        .to_string(),
                )
            })?;

            tracing::info!("Creating PostgreSQL store");
            let client = PostgreSQLClient::new(pg_config.clone()).await?;
            client.test_connection().await?;
            client.ensure_schema().await?;

            Ok(Arc::new(PostgreSQLAdapter::new(client)))
        }
        StoreBackend::Sqlite => {
            let sqlite_config = config.sqlite.as_ref().ok_or_else(|| {
                RosterError::Configuration(
                    "sqlite configuration is required when store_backend = 'sqlite'".to_string(),
                )
            })?;

            tracing::info!("Creating SQLite store");
            Ok(Arc::new(SqliteAdapter::connect(sqlite_config).await?))
        }
    }
}

/// Create the configured store and import its seed files
///
/// Seed files are imported only into a store that is empty when opened,
/// so persistent stores are seeded once. They go through the
/// [`ImportReconciler`] like any upload; a rejected seed batch is logged
/// and skipped.
///
/// # Errors
///
/// Returns an error if the store cannot be opened, a seed file cannot be
/// read or parsed, or the store fails while importing.
pub async fn open_store(config: &RosterConfig) -> Result<Arc<dyn EmployeeStore>> {
    let store = create_employee_store(config).await?;
    seed_store(store.clone(), config).await?;
    Ok(store)
}

async fn seed_store(store: Arc<dyn EmployeeStore>, config: &RosterConfig) -> Result<()> {
    if config.seed.paths.is_empty() {
        return Ok(());
    }

    let (_, stored) = store.get_paged(1, 1).await?;
    if stored > 0 {
        tracing::debug!(
            stored,
            backend = store.backend_name(),
            "Store already holds employees, skipping seed files"
        );
        return Ok(());
    }

    let reconciler = ImportReconciler::new(store);

    for path in &config.seed.paths {
        let file = UploadFile::read(path).await?;
        let employees = UploadPayload::default().with_file(file).into_employees()?;
        let outcome = reconciler.handle(employees).await?;

        if outcome.is_success() {
            tracing::info!(
                path = %path.display(),
                added = outcome.added_count,
                "Imported seed file"
            );
        } else {
            tracing::warn!(
                path = %path.display(),
                errors = ?outcome.errors,
                "Seed file rejected"
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SqliteConfig;
    use std::io::Write;

    #[tokio::test]
    async fn test_memory_store() {
        let store = create_employee_store(&RosterConfig::in_memory()).await.unwrap();
        assert_eq!(store.backend_name(), "memory");
    }

    #[tokio::test]
    async fn test_sqlite_store() {
        let mut config = RosterConfig::in_memory();
        config.store_backend = StoreBackend::Sqlite;
        config.sqlite = Some(SqliteConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        });

        let store = create_employee_store(&config).await.unwrap();
        assert_eq!(store.backend_name(), "sqlite");
    }

    #[tokio::test]
    async fn test_missing_section_is_configuration_error() {
        let mut config = RosterConfig::in_memory();
        config.store_backend = StoreBackend::PostgreSQL;
        let result = create_employee_store(&config).await;
        assert!(matches!(result, Err(RosterError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_seed_files_are_imported_once() {
        let mut seed = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(seed, "name,email,tel,joined").unwrap();
        writeln!(seed, "Alice, alice@x.com, 111, 2022.03.15").unwrap();
        writeln!(seed, "Bob, bob@x.com, 222, 2021.07.22").unwrap();

        let mut config = RosterConfig::in_memory();
        config.seed.paths = vec![seed.path().to_path_buf(), seed.path().to_path_buf()];

        // The second copy is rejected as a duplicate and skipped
        let store = open_store(&config).await.unwrap();
        assert_eq!(store.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_populated_store_is_not_reseeded() {
        let dir = tempfile::TempDir::new().unwrap();
        let seed = dir.path().join("seed.csv");
        std::fs::write(&seed, "Sam, sam@x.com, 111, 2022.03.15\n").unwrap();

        let mut config = RosterConfig::in_memory();
        config.store_backend = StoreBackend::File;
        config.file = Some(crate::config::FileStoreConfig {
            path: dir.path().join("employees.db.json"),
        });
        config.seed.paths = vec![seed];

        // Already holds a record sharing the seed's name only
        let existing = FileEmployeeStore::open(dir.path().join("employees.db.json"))
            .await
            .unwrap();
        existing
            .add_range(vec![crate::domain::Employee::new("Sam", "other@x.com", "0")])
            .await
            .unwrap();
        drop(existing);

        for _ in 0..3 {
            let store = open_store(&config).await.unwrap();
            let names: Vec<String> = store
                .get_all()
                .await
                .unwrap()
                .into_iter()
                .map(|e| e.name)
                .collect();
            assert_eq!(names, ["Sam"]);
        }
    }

    #[tokio::test]
    async fn test_file_store_seeded_once_across_opens() {
        let dir = tempfile::TempDir::new().unwrap();
        let seed = dir.path().join("seed.csv");
        std::fs::write(
            &seed,
            "Alice, alice@x.com, 111, 2022.03.15\nBob, bob@x.com, 222, 2021.07.22\n",
        )
        .unwrap();

        let mut config = RosterConfig::in_memory();
        config.store_backend = StoreBackend::File;
        config.file = Some(crate::config::FileStoreConfig {
            path: dir.path().join("employees.db.json"),
        });
        config.seed.paths = vec![seed];

        let first = open_store(&config).await.unwrap();
        assert_eq!(first.get_all().await.unwrap().len(), 2);
        drop(first);

        let second = open_store(&config).await.unwrap();
        assert_eq!(second.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_missing_seed_file_is_error() {
        let mut config = RosterConfig::in_memory();
        config.seed.paths = vec!["/nonexistent/seed.csv".into()];
        assert!(open_store(&config).await.is_err());
    }
}
