//! Storage abstraction traits
//!
//! This module defines the trait that storage backends must implement to
//! hold the employee directory.

use crate::domain::{Employee, Result};
use async_trait::async_trait;

/// Employee storage trait
///
/// Every backend keys records by [`Employee::name_key`]: lookups and
/// existence checks ignore case, and listings are ordered by the key.
/// Implementations must be safe to share between concurrent requests.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// All employees, ordered by name ignoring case
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    async fn get_all(&self) -> Result<Vec<Employee>>;

    /// One page of the ordered listing plus the total record count
    ///
    /// `page` is 1-based. A page past the end yields an empty list with the
    /// correct total.
    ///
    /// # Arguments
    ///
    /// * `page` - Page number, at least 1
    /// * `page_size` - Records per page, at least 1
    ///
    /// # Errors
    ///
    /// Returns `RosterError::Validation` when `page` or `page_size` is zero,
    /// or a store error if the backend cannot be read.
    async fn get_paged(&self, page: usize, page_size: usize) -> Result<(Vec<Employee>, usize)>;

    /// Looks up an employee by name, ignoring case
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(employee))` if found, `Ok(None)` if not.
    async fn get_by_name(&self, name: &str) -> Result<Option<Employee>>;

    /// True when an employee with this name exists, ignoring case
    async fn exists(&self, name: &str) -> Result<bool>;

    /// Inserts a batch of employees
    ///
    /// The batch becomes visible to readers as a whole or not at all.
    ///
    /// # Errors
    ///
    /// Returns a store error if the batch could not be persisted; no part of
    /// it is kept in that case.
    async fn add_range(&self, employees: Vec<Employee>) -> Result<()>;

    /// Short backend name for logs and summaries
    fn backend_name(&self) -> &'static str;
}

/// Checks paging arguments, returning the zero-based offset of the page
pub(crate) fn page_offset(page: usize, page_size: usize) -> Result<usize> {
    if page == 0 || page_size == 0 {
        return Err(crate::domain::RosterError::Validation(format!(
            "page and page size must be positive (got page={page}, page_size={page_size})"
        )));
    }
    Ok((page - 1).saturating_mul(page_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_offset() {
        assert_eq!(page_offset(1, 10).unwrap(), 0);
        assert_eq!(page_offset(3, 10).unwrap(), 20);
        assert!(page_offset(0, 10).is_err());
        assert!(page_offset(1, 0).is_err());
    }
}
