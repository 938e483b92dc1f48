// Roster - Employee Contact Directory
// Copyright (c) 2025 Roster Contributors
// Licensed under the MIT License

//! # Roster - Employee Contact Directory
//!
//! Roster keeps a directory of employee contact records and imports them in
//! bulk from CSV or JSON.
//!
//! ## Overview
//!
//! This library provides:
//! - **Parsing** of CSV and JSON uploads into candidate records
//! - **Importing** batches all-or-nothing, with duplicate detection and
//!   automatic renaming of colliding names
//! - **Listing** the directory page by page and looking records up by name
//! - **Storing** records in memory, a JSON file, PostgreSQL or SQLite
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (parsing, validation, import, queries)
//! - [`adapters`] - Storage backends behind one trait
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use roster::adapters::database::open_store;
//! use roster::config::load_config;
//! use roster::core::import::ImportReconciler;
//! use roster::core::parse::{UploadFile, UploadPayload};
//! use roster::core::query::EmployeeQueryService;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("roster.toml")?;
//!     let store = open_store(&config).await?;
//!
//!     let upload = UploadFile::read(Path::new("employees.csv")).await?;
//!     let batch = UploadPayload::default().with_file(upload).into_employees()?;
//!
//!     let outcome = ImportReconciler::new(store.clone()).handle(batch).await?;
//!     if !outcome.is_success() {
//!         for error in &outcome.errors {
//!             eprintln!("{error}");
//!         }
//!     }
//!
//!     let page = EmployeeQueryService::new(store).list_page(1, 10).await?;
//!     println!("{} employees", page.total_count);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`domain::Result`]. A rejected import batch
//! is not an error: it comes back as an [`core::import::ImportOutcome`]
//! carrying one message per offending row.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
