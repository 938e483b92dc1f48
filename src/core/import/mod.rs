//! Batch import
//!
//! [`ImportReconciler`] is the only way records enter a store.

pub mod outcome;
pub mod reconciler;

pub use outcome::{ImportOutcome, RejectionReason};
pub use reconciler::ImportReconciler;
