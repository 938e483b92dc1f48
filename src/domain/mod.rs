//! Domain models and types for Roster.
//!
//! The domain layer provides:
//! - **Employee record** ([`Employee`]) and its case-insensitive key ([`NameKey`])
//! - **Error types** ([`RosterError`], [`ParseError`], [`StoreError`])
//! - **Result type alias** ([`Result`])
//!
//! # Identity
//!
//! Name is the sole identity of an employee. Two records with names that
//! differ only in case are the same employee:
//!
//! ```rust
//! use roster::domain::Employee;
//!
//! let a = Employee::new("Alice", "alice@example.com", "010-0001");
//! let b = Employee::new("ALICE", "other@example.com", "010-0002");
//! assert_eq!(a.name_key(), b.name_key());
//! ```

pub mod employee;
pub mod errors;
pub mod result;

// Re-export commonly used types for convenience
pub use employee::{Employee, NameKey};
pub use errors::{ParseError, RosterError, StoreError};
pub use result::Result;
