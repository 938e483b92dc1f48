//! SQLite adapter implementing the store trait

use crate::adapters::database::traits::{page_offset, EmployeeStore};
use crate::config::schema::SqliteConfig;
use crate::domain::{Employee, NameKey, Result, StoreError};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

const SCHEMA_SQL: &str = include_str!("../../../migrations/sqlite/001_employees.sql");

const SELECT_EMPLOYEES: &str =
    "SELECT name, email, telephone, joined_date, birth_date FROM employees";

type EmployeeRow = (String, String, String, Option<NaiveDate>, Option<NaiveDate>);

fn into_employee(row: EmployeeRow) -> Employee {
    let (name, email, telephone, joined_date, birth_date) = row;
    Employee {
        name,
        email,
        telephone,
        joined_date,
        birth_date,
    }
}

fn query_failed(e: sqlx::Error) -> StoreError {
    StoreError::QueryFailed(e.to_string())
}

fn insert_failed(e: sqlx::Error) -> StoreError {
    StoreError::InsertFailed(e.to_string())
}

/// True for URLs that open a private in-memory database per connection
fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// SQLite implementation of [`EmployeeStore`]
///
/// The database file is created if missing. An in-memory URL is held on a
/// single pooled connection that is never recycled, so every query sees
/// the same database.
pub struct SqliteAdapter {
    pool: SqlitePool,
}

impl SqliteAdapter {
    /// Opens the database and creates the schema
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ConnectionFailed` if the URL is invalid or the
    /// database cannot be opened.
    pub async fn connect(config: &SqliteConfig) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| StoreError::ConnectionFailed(format!("Invalid SQLite URL: {e}")))?
            .create_if_missing(true);

        let pool_options = if is_memory_url(&config.url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
                .max_connections(config.max_connections)
                .idle_timeout(Some(Duration::from_secs(60)))
        };

        let pool = pool_options
            .acquire_timeout(Duration::from_secs(5))
            .connect_with(options)
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        sqlx::raw_sql(SCHEMA_SQL)
            .execute(&pool)
            .await
            .map_err(|e| StoreError::QueryFailed(format!("Failed to create schema: {e}")))?;

        tracing::info!(url = %config.url, "Connected to SQLite");
        Ok(Self { pool })
    }
}

#[async_trait]
impl EmployeeStore for SqliteAdapter {
    async fn get_all(&self) -> Result<Vec<Employee>> {
        let rows: Vec<EmployeeRow> =
            sqlx::query_as(&format!("{SELECT_EMPLOYEES} ORDER BY name_key"))
                .fetch_all(&self.pool)
                .await
                .map_err(query_failed)?;

        Ok(rows.into_iter().map(into_employee).collect())
    }

    async fn get_paged(&self, page: usize, page_size: usize) -> Result<(Vec<Employee>, usize)> {
        let offset = page_offset(page, page_size)?;
        let limit = i64::try_from(page_size).unwrap_or(i64::MAX);
        let offset = i64::try_from(offset).unwrap_or(i64::MAX);

        let mut tx = self.pool.begin().await.map_err(query_failed)?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
            .fetch_one(&mut *tx)
            .await
            .map_err(query_failed)?;

        let rows: Vec<EmployeeRow> =
            sqlx::query_as(&format!("{SELECT_EMPLOYEES} ORDER BY name_key LIMIT ? OFFSET ?"))
                .bind(limit)
                .bind(offset)
                .fetch_all(&mut *tx)
                .await
                .map_err(query_failed)?;

        tx.commit().await.map_err(query_failed)?;

        Ok((
            rows.into_iter().map(into_employee).collect(),
            usize::try_from(total).unwrap_or_default(),
        ))
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Employee>> {
        let key = NameKey::new(name);
        let row: Option<EmployeeRow> =
            sqlx::query_as(&format!("{SELECT_EMPLOYEES} WHERE name_key = ?"))
                .bind(key.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(query_failed)?;

        Ok(row.map(into_employee))
    }

    async fn exists(&self, name: &str) -> Result<bool> {
        let key = NameKey::new(name);
        let found: i64 =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM employees WHERE name_key = ?)")
                .bind(key.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(query_failed)?;

        Ok(found != 0)
    }

    async fn add_range(&self, employees: Vec<Employee>) -> Result<()> {
        if employees.is_empty() {
            return Ok(());
        }

        let count = employees.len();
        let mut tx = self.pool.begin().await.map_err(insert_failed)?;

        for employee in employees {
            let key = employee.name_key();
            sqlx::query(
                "INSERT INTO employees (name, name_key, email, telephone, joined_date, birth_date) \
                 VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(&employee.name)
            .bind(key.as_str())
            .bind(&employee.email)
            .bind(&employee.telephone)
            .bind(employee.joined_date)
            .bind(employee.birth_date)
            .execute(&mut *tx)
            .await
            .map_err(|e| StoreError::InsertFailed(format!("'{}': {e}", employee.name)))?;
        }

        tx.commit().await.map_err(insert_failed)?;

        tracing::debug!(inserted = count, "Added employees to SQLite");
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RosterError;

    async fn memory_store() -> SqliteAdapter {
        SqliteAdapter::connect(&SqliteConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        })
        .await
        .unwrap()
    }

    fn employee(name: &str) -> Employee {
        Employee::new(name, format!("{}@x.com", name.to_lowercase()), "000")
            .with_joined_date(NaiveDate::from_ymd_opt(2021, 7, 22))
    }

    #[test]
    fn test_is_memory_url() {
        assert!(is_memory_url("sqlite::memory:"));
        assert!(is_memory_url("sqlite://file:roster?mode=memory&cache=shared"));
        assert!(!is_memory_url("sqlite://data/roster.db"));
    }

    #[tokio::test]
    async fn test_round_trip_preserves_dates() {
        let store = memory_store().await;
        store
            .add_range(vec![employee("Alice").with_birth_date(NaiveDate::from_ymd_opt(1990, 1, 2))])
            .await
            .unwrap();

        let alice = store.get_by_name("ALICE").await.unwrap().unwrap();
        assert_eq!(alice.joined_date, NaiveDate::from_ymd_opt(2021, 7, 22));
        assert_eq!(alice.birth_date, NaiveDate::from_ymd_opt(1990, 1, 2));
        assert!(store.exists("alice").await.unwrap());
        assert!(!store.exists("bob").await.unwrap());
    }

    #[tokio::test]
    async fn test_ordering_and_paging() {
        let store = memory_store().await;
        store
            .add_range(vec![employee("charlie"), employee("Bob"), employee("alice")])
            .await
            .unwrap();

        let names: Vec<_> = store
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, ["alice", "Bob", "charlie"]);

        let (items, total) = store.get_paged(2, 2).await.unwrap();
        assert_eq!(total, 3);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "charlie");
    }

    #[tokio::test]
    async fn test_failed_batch_is_rolled_back() {
        let store = memory_store().await;
        store.add_range(vec![employee("Alice")]).await.unwrap();

        let result = store
            .add_range(vec![employee("Bob"), employee("ALICE")])
            .await;

        assert!(matches!(
            result,
            Err(RosterError::Store(StoreError::InsertFailed(_)))
        ));
        assert!(!store.exists("Bob").await.unwrap());
        assert_eq!(store.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_url() {
        let result = SqliteAdapter::connect(&SqliteConfig {
            url: "sqlite://data/roster.db?mode=bogus".to_string(),
            max_connections: 1,
        })
        .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_file_database_is_created() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("roster.db");
        let config = SqliteConfig {
            url: format!("sqlite://{}", path.display()),
            max_connections: 2,
        };

        let store = SqliteAdapter::connect(&config).await.unwrap();
        store.add_range(vec![employee("Alice")]).await.unwrap();
        drop(store);

        let reopened = SqliteAdapter::connect(&config).await.unwrap();
        assert!(reopened.exists("alice").await.unwrap());
        assert!(path.exists());
    }
}
