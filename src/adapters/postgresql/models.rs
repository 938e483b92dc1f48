//! PostgreSQL row model
//!
//! Maps the `employees` table to and from the domain [`Employee`].

use crate::domain::Employee;
use chrono::NaiveDate;
use tokio_postgres::Row;

/// Column list shared by every SELECT
pub const EMPLOYEE_COLUMNS: &str = "name, email, telephone, joined_date, birth_date";

/// One row of the `employees` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostgreSQLEmployee {
    pub name: String,
    pub name_key: String,
    pub email: String,
    pub telephone: String,
    pub joined_date: Option<NaiveDate>,
    pub birth_date: Option<NaiveDate>,
}

impl PostgreSQLEmployee {
    /// Builds the row for an employee, deriving `name_key`
    pub fn from_domain(employee: Employee) -> Self {
        Self {
            name_key: employee.name_key().into_inner(),
            name: employee.name,
            email: employee.email,
            telephone: employee.telephone,
            joined_date: employee.joined_date,
            birth_date: employee.birth_date,
        }
    }

    /// Decodes a row selected with [`EMPLOYEE_COLUMNS`]
    pub fn from_row(row: &Row) -> Result<Employee, tokio_postgres::Error> {
        Ok(Employee {
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            telephone: row.try_get("telephone")?,
            joined_date: row.try_get("joined_date")?,
            birth_date: row.try_get("birth_date")?,
        })
    }
}
