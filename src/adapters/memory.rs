//! In-memory employee store
//!
//! Contents live for the lifetime of the process. Useful for tests and
//! throwaway sessions.

use crate::adapters::database::traits::{page_offset, EmployeeStore};
use crate::domain::{Employee, NameKey, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

/// Employees keyed by lower-cased name
///
/// The map's key order is the listing order, so reads never sort.
pub(crate) type EmployeeMap = BTreeMap<NameKey, Employee>;

/// Inserts `employees` into `map`, keeping the existing record on a name
/// collision. Returns the number inserted.
pub(crate) fn insert_all(map: &mut EmployeeMap, employees: Vec<Employee>) -> usize {
    let mut inserted = 0;
    for employee in employees {
        let key = employee.name_key();
        if map.contains_key(&key) {
            tracing::warn!(name = %employee.name, "Skipping employee whose name is already stored");
            continue;
        }
        map.insert(key, employee);
        inserted += 1;
    }
    inserted
}

/// Slices one page out of the ordered map
pub(crate) fn page_of(map: &EmployeeMap, page: usize, page_size: usize) -> Result<(Vec<Employee>, usize)> {
    let offset = page_offset(page, page_size)?;
    let items = map.values().skip(offset).take(page_size).cloned().collect();
    Ok((items, map.len()))
}

/// Volatile [`EmployeeStore`] guarded by a single lock
#[derive(Default)]
pub struct MemoryEmployeeStore {
    employees: Mutex<EmployeeMap>,
}

impl MemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
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
        let inserted = insert_all(&mut stored, employees);
        tracing::debug!(inserted, total = stored.len(), "Added employees to memory store");
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
