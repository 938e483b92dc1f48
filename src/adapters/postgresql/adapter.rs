//! PostgreSQL adapter implementing the store trait

use crate::adapters::database::traits::{page_offset, EmployeeStore};
use crate::adapters::postgresql::client::PostgreSQLClient;
use crate::adapters::postgresql::models::{PostgreSQLEmployee, EMPLOYEE_COLUMNS};
use crate::domain::{Employee, NameKey, Result, StoreError};
use async_trait::async_trait;
use std::sync::Arc;
use tokio_postgres::IsolationLevel;

/// PostgreSQL implementation of [`EmployeeStore`]
///
/// Names are matched through the `name_key` column, compared with the "C"
/// collation so ordering is by code point like the other backends.
pub struct PostgreSQLAdapter {
    client: Arc<PostgreSQLClient>,
}

impl PostgreSQLAdapter {
    /// Create a new PostgreSQL adapter
    pub fn new(client: PostgreSQLClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

fn query_failed(e: tokio_postgres::Error) -> StoreError {
    StoreError::QueryFailed(e.to_string())
}

#[async_trait]
impl EmployeeStore for PostgreSQLAdapter {
    async fn get_all(&self) -> Result<Vec<Employee>> {
        let client = self.client.get_connection().await?;
        let rows = client
            .query(
                &format!("SELECT {EMPLOYEE_COLUMNS} FROM employees ORDER BY name_key COLLATE \"C\""),
                &[],
            )
            .await
            .map_err(query_failed)?;

        let employees = rows
            .iter()
            .map(PostgreSQLEmployee::from_row)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(query_failed)?;
        Ok(employees)
    }

    async fn get_paged(&self, page: usize, page_size: usize) -> Result<(Vec<Employee>, usize)> {
        let offset = page_offset(page, page_size)?;
        let limit = i64::try_from(page_size).unwrap_or(i64::MAX);
        let offset = i64::try_from(offset).unwrap_or(i64::MAX);

        let mut client = self.client.get_connection().await?;

        // Count and page come from one snapshot
        let tx = client
            .build_transaction()
            .isolation_level(IsolationLevel::RepeatableRead)
            .read_only(true)
            .start()
            .await
            .map_err(query_failed)?;

        let total: i64 = tx
            .query_one("SELECT COUNT(*) FROM employees", &[])
            .await
            .map_err(query_failed)?
            .get(0);

        let rows = tx
            .query(
                &format!(
                    "SELECT {EMPLOYEE_COLUMNS} FROM employees ORDER BY name_key COLLATE \"C\" LIMIT $1 OFFSET $2"
                ),
                &[&limit, &offset],
            )
            .await
            .map_err(query_failed)?;

        tx.commit().await.map_err(query_failed)?;

        let items = rows
            .iter()
            .map(PostgreSQLEmployee::from_row)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(query_failed)?;

        Ok((items, usize::try_from(total).unwrap_or_default()))
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Employee>> {
        let key = NameKey::new(name);
        let client = self.client.get_connection().await?;

        let row = client
            .query_opt(
                &format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE name_key = $1"),
                &[&key.as_str()],
            )
            .await
            .map_err(query_failed)?;

        match row {
            Some(row) => Ok(Some(PostgreSQLEmployee::from_row(&row).map_err(query_failed)?)),
            None => Ok(None),
        }
    }

    async fn exists(&self, name: &str) -> Result<bool> {
        let key = NameKey::new(name);
        let client = self.client.get_connection().await?;

        let row = client
            .query_one(
                "SELECT EXISTS(SELECT 1 FROM employees WHERE name_key = $1)",
                &[&key.as_str()],
            )
            .await
            .map_err(query_failed)?;

        Ok(row.get(0))
    }

    async fn add_range(&self, employees: Vec<Employee>) -> Result<()> {
        if employees.is_empty() {
            return Ok(());
        }

        let count = employees.len();
        let mut client = self.client.get_connection().await?;
        let tx = client
            .transaction()
            .await
            .map_err(|e| StoreError::InsertFailed(e.to_string()))?;

        let statement = tx
            .prepare(
                "INSERT INTO employees (name, name_key, email, telephone, joined_date, birth_date) \
                 VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .await
            .map_err(|e| StoreError::InsertFailed(e.to_string()))?;

        for employee in employees {
            let row = PostgreSQLEmployee::from_domain(employee);
            tx.execute(
                &statement,
                &[
                    &row.name,
                    &row.name_key,
                    &row.email,
                    &row.telephone,
                    &row.joined_date,
                    &row.birth_date,
                ],
            )
            .await
            .map_err(|e| StoreError::InsertFailed(format!("'{}': {e}", row.name)))?;
        }

        tx.commit()
            .await
            .map_err(|e| StoreError::InsertFailed(e.to_string()))?;

        tracing::debug!(inserted = count, "Added employees to PostgreSQL");
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "postgresql"
    }
}
