//! CSV upload parser
//!
//! Line-oriented, comma-separated, no quoting. Columns are
//! `name, email, telephone, joinedDate[, birthDate]`. A first line whose
//! first field is `name` is treated as a header. Rows with fewer than four
//! fields are skipped; unparseable dates become unset.

use super::dates::parse_csv_date;
use crate::domain::Employee;

const MIN_FIELDS: usize = 4;

/// Parses CSV text into candidate employees
pub fn parse_csv(content: &str) -> Vec<Employee> {
    let mut employees = Vec::new();
    let mut first_line = true;

    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split(',').map(str::trim).collect();

        if std::mem::take(&mut first_line) && parts[0].eq_ignore_ascii_case("name") {
            continue;
        }

        if parts.len() < MIN_FIELDS {
            tracing::debug!(
                line = line_no + 1,
                fields = parts.len(),
                "Skipping CSV row with too few fields"
            );
            continue;
        }

        let birth_date = parts.get(4).and_then(|s| parse_csv_date(s));

        employees.push(
            Employee::new(parts[0], parts[1], parts[2])
                .with_joined_date(parse_csv_date(parts[3]))
                .with_birth_date(birth_date),
        );
    }

    employees
}
