//! SQLite storage backend

pub mod adapter;

pub use adapter::SqliteAdapter;
