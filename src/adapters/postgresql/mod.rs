//! PostgreSQL storage backend
//!
//! Employees live in a single `employees` table created on first connect.

pub mod adapter;
pub mod client;
pub mod models;

pub use adapter::PostgreSQLAdapter;
pub use client::PostgreSQLClient;
pub use models::PostgreSQLEmployee;
