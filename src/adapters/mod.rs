//! Storage backends for Roster.
//!
//! - [`database`] - The [`database::EmployeeStore`] trait and the factory
//!   that picks a backend from configuration
//! - [`memory`] - Volatile in-process store
//! - [`file`] - Single JSON file store
//! - [`postgresql`] - PostgreSQL store
//! - [`sqlite`] - SQLite store
//!
//! # Design Pattern
//!
//! Backends follow the **Adapter Pattern**: callers hold an
//! `Arc<dyn EmployeeStore>` and never see which backend is behind it. All
//! backends key records by lower-cased name, so lookups, existence checks
//! and listing order agree across them.
//!
//! ```rust,no_run
//! use roster::adapters::database::create_employee_store;
//! use roster::config::RosterConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = create_employee_store(&RosterConfig::in_memory()).await?;
//! let (first_page, total) = store.get_paged(1, 10).await?;
//! println!("{} of {} employees", first_page.len(), total);
//! # Ok(())
//! # }
//! ```

pub mod database;
pub mod file;
pub mod memory;
pub mod postgresql;
pub mod sqlite;
