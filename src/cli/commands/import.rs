//! Import command implementation
//!
//! Parses an uploaded file and/or pasted text and runs the batch through
//! the importer. The response body mirrors the upload endpoint:
//! `{message, count}` on success, `{message, errors}` on rejection.

use super::{exit_code_for, open_configured_store, EXIT_INPUT, EXIT_OK, EXIT_REJECTED};
use crate::core::import::{ImportOutcome, ImportReconciler};
use crate::core::parse::{UploadFile, UploadPayload};
use clap::Args;
use serde_json::{json, Value};
use std::path::PathBuf;

/// Message returned for a rejected batch
pub const REJECTED_MESSAGE: &str = "Validation failed for one or more employees.";

/// Arguments for the import command
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// CSV or JSON file to import (format taken from the extension)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Records given inline
    #[arg(short, long)]
    pub text: Option<String>,

    /// Format of --text (csv or json, default csv)
    #[arg(long)]
    pub format: Option<String>,
}

impl ImportArgs {
    /// Execute the import command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let payload = match self.payload().await {
            Ok(p) => p,
            Err(message) => {
                println!("{}", json!({ "message": message }));
                return Ok(EXIT_INPUT);
            }
        };

        let employees = match payload.into_employees() {
            Ok(e) => e,
            Err(e) => {
                println!("{}", json!({ "message": e.to_string() }));
                return Ok(EXIT_INPUT);
            }
        };

        let (_, store) = match open_configured_store(config_path).await {
            Ok(opened) => opened,
            Err(code) => return Ok(code),
        };

        let reconciler = ImportReconciler::new(store);
        let outcome = match reconciler.handle(employees).await {
            Ok(o) => o,
            Err(e) => {
                crate::log_error_with_context!(&e, "Import failed");
                eprintln!("❌ Import failed");
                eprintln!("   Error: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        println!("{}", serde_json::to_string_pretty(&response_body(&outcome))?);

        Ok(if outcome.is_success() {
            EXIT_OK
        } else {
            EXIT_REJECTED
        })
    }

    async fn payload(&self) -> Result<UploadPayload, String> {
        let mut payload = UploadPayload::default();

        if let Some(ref path) = self.file {
            let file = UploadFile::read(path).await.map_err(|e| e.to_string())?;
            payload = payload.with_file(file);
        }

        if let Some(ref text) = self.text {
            payload = payload.with_text(text.clone(), self.format.clone());
        }

        Ok(payload)
    }
}

/// Builds the response body for an import outcome
pub fn response_body(outcome: &ImportOutcome) -> Value {
    if !outcome.is_success() {
        return json!({
            "message": REJECTED_MESSAGE,
            "errors": outcome.errors,
        });
    }

    let mut body = json!({
        "message": format!("{} employee(s) added successfully.", outcome.added_count),
        "count": outcome.added_count,
    });

    if !outcome.renamed.is_empty() {
        body["renamed"] = outcome
            .renamed
            .iter()
            .map(|(original, assigned)| json!({ "original": original, "assigned": assigned }))
            .collect();
    }

    body
}
