//! Core business logic for Roster.
//!
//! # Modules
//!
//! - [`parse`] - CSV and JSON upload parsing
//! - [`validation`] - Field-level rules for candidate records
//! - [`import`] - Batch import reconciliation
//! - [`query`] - Paged listing and lookup
//!
//! # Import Workflow
//!
//! 1. **Parse**: Turn the uploaded file and/or text into candidate records
//! 2. **Validate**: Reject the batch if any record breaks a field rule
//! 3. **Detect duplicates**: Reject the batch if a record repeats another
//! 4. **Rename**: Give colliding names a numeric suffix
//! 5. **Commit**: Store the batch in one call
//!
//! # Example
//!
//! ```rust,no_run
//! use roster::adapters::memory::MemoryEmployeeStore;
//! use roster::core::import::ImportReconciler;
//! use roster::core::parse::UploadPayload;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(MemoryEmployeeStore::new());
//! let reconciler = ImportReconciler::new(store);
//!
//! let batch = UploadPayload::default()
//!     .with_text("Alice, alice@example.com, 010-1234, 2022.03.15", None)
//!     .into_employees()?;
//!
//! let outcome = reconciler.handle(batch).await?;
//! println!("Added: {}", outcome.added_count);
//! # Ok(())
//! # }
//! ```

pub mod import;
pub mod parse;
pub mod query;
pub mod validation;
