//! Get command implementation
//!
//! Looks up a single employee by name, ignoring case.

use super::{exit_code_for, open_configured_store, EXIT_OK, EXIT_REJECTED};
use crate::core::query::EmployeeQueryService;
use crate::domain::RosterError;
use clap::Args;

/// Arguments for the get command
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Employee name
    pub name: String,

    /// Print the record as JSON
    #[arg(long)]
    pub json: bool,
}

impl GetArgs {
    /// Execute the get command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let (_, store) = match open_configured_store(config_path).await {
            Ok(opened) => opened,
            Err(code) => return Ok(code),
        };

        let service = EmployeeQueryService::new(store);

        match service.get_by_name(&self.name).await {
            Ok(employee) => {
                if self.json {
                    println!("{}", serde_json::to_string_pretty(&employee)?);
                } else {
                    println!("Name:       {}", employee.name);
                    println!("Email:      {}", employee.email);
                    println!("Telephone:  {}", employee.telephone);
                    if let Some(joined) = employee.joined_date {
                        println!("Joined:     {joined}");
                    }
                    if let Some(birth) = employee.birth_date {
                        println!("Birth date: {birth}");
                    }
                }
                Ok(EXIT_OK)
            }
            Err(RosterError::NotFound(message)) => {
                if self.json {
                    println!("{}", serde_json::json!({ "message": message }));
                } else {
                    println!("{message}");
                }
                Ok(EXIT_REJECTED)
            }
            Err(e) => {
                eprintln!("❌ Failed to look up employee");
                eprintln!("   Error: {e}");
                Ok(exit_code_for(&e))
            }
        }
    }
}
