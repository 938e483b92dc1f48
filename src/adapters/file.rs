//! JSON file employee store
//!
//! The directory is kept as one JSON array at a configured path and
//! rewritten in full on every insert. Reads are served from an in-memory
//! copy loaded at open.

use crate::adapters::database::traits::EmployeeStore;
use crate::adapters::memory::{insert_all, page_of, EmployeeMap};
use crate::domain::{Employee, NameKey, Result, StoreError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// File-backed [`EmployeeStore`]
pub struct FileEmployeeStore {
    path: PathBuf,
    employees: Mutex<EmployeeMap>,
}

impl FileEmployeeStore {
    /// Opens the store, loading existing records
    ///
    /// A missing file is an empty directory; the file is created on the
    /// first insert.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file exists but cannot be read, or
    /// `StoreError::Corrupt` if it is not a JSON array of employees.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut employees = EmployeeMap::new();

        match tokio::fs::read_to_string(&path).await {
            Ok(content) if content.trim().is_empty() => {}
            Ok(content) => {
                let records: Vec<Employee> = serde_json::from_str(&content).map_err(|e| {
                    StoreError::Corrupt(format!("{}: {e}", path.display()))
                })?;
                insert_all(&mut employees, records);
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Employee file not found, starting empty");
            }
            Err(e) => return Err(io_error(&path, e).into()),
        }

        tracing::info!(path = %path.display(), count = employees.len(), "Opened file store");

        Ok(Self {
            path,
            employees: Mutex::new(employees),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, employees: &EmployeeMap) -> Result<()> {
        let records: Vec<&Employee> = employees.values().collect();
        let json = serde_json::to_string_pretty(&records)
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| io_error(parent, e))?;
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, json)
            .await
            .map_err(|e| io_error(&tmp, e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| io_error(&self.path, e))?;

        Ok(())
    }
}

fn io_error(path: &Path, err: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

#[async_trait]
impl EmployeeStore for FileEmployeeStore {
    async fn get_all(&self) -> Result<Vec<Employee>> {
        let employees = self.employees.lock().await;
        Ok(employees.values().cloned().collect())
    }

    async fn get_paged(&self, page: usize, page_size: usize) -> Result<(Vec<Employee>, usize)> {
        let employees = self.employees.lock().await;
        page_of(&employees, page, page_size)
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Employee>> {
        let employees = self.employees.lock().await;
        Ok(employees.get(&NameKey::new(name)).cloned())
    }

    async fn exists(&self, name: &str) -> Result<bool> {
        let employees = self.employees.lock().await;
        Ok(employees.contains_key(&NameKey::new(name)))
    }

    async fn add_range(&self, employees: Vec<Employee>) -> Result<()> {
        let mut stored = self.employees.lock().await;

        let mut updated = stored.clone();
        let inserted = insert_all(&mut updated, employees);
        if inserted == 0 {
            return Ok(());
        }

        self.persist(&updated).await?;
        *stored = updated;

        tracing::debug!(
            inserted,
            total = stored.len(),
            path = %self.path.display(),
            "Added employees to file store"
        );
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
