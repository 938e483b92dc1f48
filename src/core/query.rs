//! Read side of the directory: paged listing and lookup by name

use crate::adapters::database::EmployeeStore;
use crate::domain::{Employee, Result, RosterError};
use serde::Serialize;
use std::sync::Arc;

/// Page size used when none is configured
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One page of the directory listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedEmployees {
    pub items: Vec<Employee>,
    pub total_count: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

/// Listing and lookup over an [`EmployeeStore`]
pub struct EmployeeQueryService {
    store: Arc<dyn EmployeeStore>,
    default_page_size: usize,
}

impl EmployeeQueryService {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self::with_default_page_size(store, DEFAULT_PAGE_SIZE)
    }

    /// `default_page_size` replaces any requested page size below 1
    pub fn with_default_page_size(store: Arc<dyn EmployeeStore>, default_page_size: usize) -> Self {
        Self {
            store,
            default_page_size: default_page_size.max(1),
        }
    }

    /// Returns one page of employees ordered by name
    ///
    /// A page below 1 is treated as page 1 and a page size below 1 as the
    /// default page size.
    pub async fn list_page(&self, page: i64, page_size: i64) -> Result<PagedEmployees> {
        let page = usize::try_from(page).ok().filter(|p| *p >= 1).unwrap_or(1);
        let page_size = usize::try_from(page_size)
            .ok()
            .filter(|s| *s >= 1)
            .unwrap_or(self.default_page_size);

        let (items, total_count) = self.store.get_paged(page, page_size).await?;
        let total_pages = total_count.div_ceil(page_size);

        tracing::debug!(
            page,
            page_size,
            total_count,
            returned = items.len(),
            "Listed employees"
        );

        Ok(PagedEmployees {
            items,
            total_count,
            page,
            page_size,
            total_pages,
        })
    }

    /// Looks up one employee by name, ignoring case
    ///
    /// # Errors
    ///
    /// Returns `RosterError::NotFound` when no employee has that name.
    pub async fn get_by_name(&self, name: &str) -> Result<Employee> {
        self.store
            .get_by_name(name)
            .await?
            .ok_or_else(|| RosterError::NotFound(format!("Employee '{name}' not found.")))
    }
}
