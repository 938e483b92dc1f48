//! Storage abstraction layer
//!
//! This module provides a trait-based abstraction for employee storage,
//! allowing Roster to work with different backends (memory, file,
//! PostgreSQL, SQLite).

pub mod factory;
pub mod traits;

pub use factory::{create_employee_store, open_store};
pub use traits::EmployeeStore;
