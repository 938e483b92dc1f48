//! List command implementation
//!
//! Prints one page of the directory, ordered by name.

use super::{exit_code_for, open_configured_store, EXIT_OK};
use crate::core::query::{EmployeeQueryService, PagedEmployees};
use crate::domain::Employee;
use clap::Args;

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Page number (1-based)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Records per page (defaults to query.default_page_size)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Print the page as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    /// Execute the list command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let (config, store) = match open_configured_store(config_path).await {
            Ok(opened) => opened,
            Err(code) => return Ok(code),
        };

        let service =
            EmployeeQueryService::with_default_page_size(store, config.query.default_page_size);

        // Zero selects the configured default
        let page_size = self.page_size.map(i64::from).unwrap_or(0);

        let page = match service.list_page(i64::from(self.page), page_size).await {
            Ok(p) => p,
            Err(e) => {
                eprintln!("❌ Failed to list employees");
                eprintln!("   Error: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&page)?);
        } else {
            print_page(&page);
        }

        Ok(EXIT_OK)
    }
}

fn print_page(page: &PagedEmployees) {
    if page.items.is_empty() {
        println!("No employees found.");
    } else {
        println!(
            "{:<30} {:<35} {:<18} {:<12} {:<12}",
            "Name", "Email", "Telephone", "Joined", "Birth Date"
        );
        for employee in &page.items {
            println!("{}", format_row(employee));
        }
    }

    println!();
    println!(
        "Page {} of {} ({} employees)",
        page.page,
        page.total_pages.max(1),
        page.total_count
    );
}

fn format_row(employee: &Employee) -> String {
    let date = |d: Option<chrono::NaiveDate>| {
        d.map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string())
    };

    format!(
        "{:<30} {:<35} {:<18} {:<12} {:<12}",
        employee.name,
        employee.email,
        employee.telephone,
        date(employee.joined_date),
        date(employee.birth_date)
    )
}
