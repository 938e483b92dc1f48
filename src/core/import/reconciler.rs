//! Batch import reconciliation
//!
//! A batch passes through four phases, each of which stops the pipeline
//! on failure:
//!
//! 1. **Validation**: every record is checked field by field.
//! 2. **Duplicates**: a record whose name, email and telephone all match an
//!    earlier record in the batch, or a stored record, rejects the batch.
//! 3. **Renaming**: a record whose name is already taken (stored, or
//!    claimed earlier in the batch) is renamed `"{name} 2"`, `"{name} 3"`, …
//! 4. **Commit**: the surviving records go to the store in one call.
//!
//! Rejected batches never touch the store beyond reads.

use super::outcome::{ImportOutcome, RejectionReason};
use crate::adapters::database::EmployeeStore;
use crate::core::validation::validate_batch;
use crate::domain::{Employee, NameKey, Result};
use crate::{log_import_complete, log_import_rejected, log_import_start};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

/// First suffix tried when a name is taken
const FIRST_RENAME_SUFFIX: u32 = 2;

/// Imports batches of candidate employees into a store
pub struct ImportReconciler {
    store: Arc<dyn EmployeeStore>,
}

impl ImportReconciler {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// Runs a batch through validation, duplicate detection, renaming and
    /// commit
    ///
    /// # Errors
    ///
    /// Only store failures are returned as `Err`. Validation and duplicate
    /// rejections are reported in the [`ImportOutcome`].
    pub async fn handle(&self, employees: Vec<Employee>) -> Result<ImportOutcome> {
        let started = Instant::now();
        log_import_start!(employees.len(), self.store.backend_name());

        let validation_errors = validation_messages(&employees);
        if !validation_errors.is_empty() {
            log_import_rejected!("validation", validation_errors.len());
            return Ok(ImportOutcome::rejected(
                RejectionReason::Validation,
                validation_errors,
            ));
        }

        let duplicate_errors = self.duplicate_messages(&employees).await?;
        if !duplicate_errors.is_empty() {
            log_import_rejected!("duplicate", duplicate_errors.len());
            return Ok(ImportOutcome::rejected(
                RejectionReason::Duplicate,
                duplicate_errors,
            ));
        }

        let (employees, renamed) = self.assign_unique_names(employees).await?;
        let count = employees.len();

        self.store.add_range(employees).await?;

        log_import_complete!(count, renamed.len(), started.elapsed());
        Ok(ImportOutcome::accepted(count, renamed))
    }

    async fn duplicate_messages(&self, employees: &[Employee]) -> Result<Vec<String>> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        for (index, employee) in employees.iter().enumerate() {
            let row = index + 1;

            if !seen.insert(employee.identity_key()) {
                errors.push(format!(
                    "Row {row}: Duplicate employee data: '{}' with email '{}' and tel '{}' appears multiple times in the upload.",
                    employee.name, employee.email, employee.telephone
                ));
                continue;
            }

            let stored = self.store.get_by_name(&employee.name).await?;
            if stored.is_some_and(|existing| existing.same_identity(employee)) {
                errors.push(format!(
                    "Row {row}: Employee '{}' with email '{}' and tel '{}' already exists.",
                    employee.name, employee.email, employee.telephone
                ));
            }
        }

        Ok(errors)
    }

    async fn assign_unique_names(
        &self,
        employees: Vec<Employee>,
    ) -> Result<(Vec<Employee>, Vec<(String, String)>)> {
        let mut claimed: HashSet<NameKey> = HashSet::with_capacity(employees.len());
        let mut renamed = Vec::new();
        let mut result = Vec::with_capacity(employees.len());

        for employee in employees {
            let mut name = employee.name.clone();
            let mut suffix = FIRST_RENAME_SUFFIX;

            while self.is_taken(&name, &claimed).await? {
                name = format!("{} {suffix}", employee.name);
                suffix += 1;
            }

            claimed.insert(NameKey::new(&name));

            if name == employee.name {
                result.push(employee);
            } else {
                tracing::debug!(original = %employee.name, assigned = %name, "Renamed colliding employee");
                result.push(employee.renamed(name.clone()));
                renamed.push((employee.name, name));
            }
        }

        Ok((result, renamed))
    }

    async fn is_taken(&self, name: &str, claimed: &HashSet<NameKey>) -> Result<bool> {
        if claimed.contains(&NameKey::new(name)) {
            return Ok(true);
        }
        self.store.exists(name).await
    }
}

/// Formats batch validation failures as `Row {n}: [{field}] {message}`
fn validation_messages(employees: &[Employee]) -> Vec<String> {
    validate_batch(employees)
        .into_iter()
        .flat_map(|(index, errors)| {
            errors
                .into_iter()
                .map(move |e| format!("Row {}: [{}] {}", index + 1, e.field, e.message))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryEmployeeStore;
    use chrono::NaiveDate;

    fn employee(name: &str, email: &str, tel: &str) -> Employee {
        Employee::new(name, email, tel).with_joined_date(NaiveDate::from_ymd_opt(2022, 1, 1))
    }

    fn reconciler() -> (Arc<MemoryEmployeeStore>, ImportReconciler) {
        let store = Arc::new(MemoryEmployeeStore::new());
        let reconciler = ImportReconciler::new(store.clone());
        (store, reconciler)
    }

    #[tokio::test]
    async fn test_clean_batch_is_added() {
        let (store, reconciler) = reconciler();
        let outcome = reconciler
            .handle(vec![
                employee("Alice", "alice@x.com", "111"),
                employee("Bob", "bob@x.com", "222"),
            ])
            .await
            .unwrap();

        assert_eq!(outcome.added_count, 2);
        assert!(outcome.errors.is_empty());
        assert_eq!(store.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_validation_failure_reports_rows() {
        let (store, reconciler) = reconciler();
        let outcome = reconciler
            .handle(vec![
                employee("Alice", "alice@x.com", "111"),
                Employee::new("", "bad", ""),
            ])
            .await
            .unwrap();

        assert_eq!(outcome.added_count, 0);
        assert_eq!(outcome.rejection, Some(RejectionReason::Validation));
        assert_eq!(
            outcome.errors,
            [
                "Row 2: [name] Name is required.",
                "Row 2: [email] Invalid email format: 'bad'.",
                "Row 2: [joinedDate] Joined date is required and must be a valid date (yyyy.MM.dd or yyyy-MM-dd).",
            ]
        );
        assert!(store.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_intra_batch_duplicate_rejects_batch() {
        let (store, reconciler) = reconciler();
        let outcome = reconciler
            .handle(vec![
                employee("Alice", "alice@x.com", "111"),
                employee("ALICE", "Alice@X.com", "111"),
            ])
            .await
            .unwrap();

        assert_eq!(outcome.added_count, 0);
        assert_eq!(outcome.rejection, Some(RejectionReason::Duplicate));
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].starts_with("Row 2:"));
        assert!(outcome.errors[0].contains("appears multiple times"));
        assert!(store.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_stored_duplicate_rejects_batch() {
        let (_, reconciler) = reconciler();
        reconciler
            .handle(vec![employee("Alice", "alice@x.com", "111")])
            .await
            .unwrap();

        let outcome = reconciler
            .handle(vec![
                employee("Bob", "bob@x.com", "222"),
                employee("alice", "ALICE@x.com", "111"),
            ])
            .await
            .unwrap();

        assert_eq!(outcome.added_count, 0);
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].starts_with("Row 2:"));
        assert!(outcome.errors[0].contains("already exists"));
    }

    #[tokio::test]
    async fn test_all_duplicates_are_reported() {
        let (_, reconciler) = reconciler();
        let a = employee("Alice", "alice@x.com", "111");
        let b = employee("Bob", "bob@x.com", "222");
        let outcome = reconciler
            .handle(vec![a.clone(), b.clone(), a, b])
            .await
            .unwrap();

        assert_eq!(outcome.errors.len(), 2);
        assert!(outcome.errors[0].starts_with("Row 3:"));
        assert!(outcome.errors[1].starts_with("Row 4:"));
    }

    #[tokio::test]
    async fn test_name_collision_with_store_is_renamed() {
        let (store, reconciler) = reconciler();
        reconciler
            .handle(vec![employee("Alice", "alice@x.com", "111")])
            .await
            .unwrap();

        let outcome = reconciler
            .handle(vec![employee("Alice", "new@x.com", "999")])
            .await
            .unwrap();

        assert_eq!(outcome.added_count, 1);
        assert_eq!(
            outcome.renamed,
            [("Alice".to_string(), "Alice 2".to_string())]
        );
        let renamed = store.get_by_name("alice 2").await.unwrap().unwrap();
        assert_eq!(renamed.email, "new@x.com");
    }

    #[tokio::test]
    async fn test_same_name_in_batch_gets_sequential_suffixes() {
        let (store, reconciler) = reconciler();
        let outcome = reconciler
            .handle(vec![
                employee("Sam", "a@x.com", "1"),
                employee("Sam", "b@x.com", "2"),
                employee("sam", "c@x.com", "3"),
                employee("Sam", "d@x.com", "4"),
            ])
            .await
            .unwrap();

        assert_eq!(outcome.added_count, 4);
        let names: Vec<_> = store
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, ["Sam", "Sam 2", "sam 3", "Sam 4"]);
    }

    #[tokio::test]
    async fn test_rename_skips_taken_suffix() {
        let (store, reconciler) = reconciler();
        reconciler
            .handle(vec![
                employee("Kim", "k1@x.com", "1"),
                employee("Kim 2", "k2@x.com", "2"),
            ])
            .await
            .unwrap();

        let outcome = reconciler
            .handle(vec![employee("Kim", "k3@x.com", "3")])
            .await
            .unwrap();

        assert_eq!(outcome.renamed[0].1, "Kim 3");
        assert!(store.exists("kim 3").await.unwrap());
    }

    #[tokio::test]
    async fn test_empty_batch_adds_nothing() {
        let (_, reconciler) = reconciler();
        let outcome = reconciler.handle(Vec::new()).await.unwrap();
        assert!(outcome.is_success());
        assert_eq!(outcome.added_count, 0);
    }
}
