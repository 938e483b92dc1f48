//! JSON upload parser
//!
//! Accepts an array of objects with optional `name`, `email`, `tel`,
//! `joined` and `birthDate` fields. Missing strings default to empty and
//! missing or unparseable dates to unset.

use super::dates::parse_json_date;
use crate::domain::{Employee, ParseError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct JsonEmployeeRecord {
    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    email: Option<String>,

    #[serde(default)]
    tel: Option<String>,

    #[serde(default)]
    joined: Option<String>,

    #[serde(default, rename = "birthDate")]
    birth_date: Option<String>,
}

impl From<JsonEmployeeRecord> for Employee {
    fn from(record: JsonEmployeeRecord) -> Self {
        Employee::new(
            record.name.unwrap_or_default(),
            record.email.unwrap_or_default(),
            record.tel.unwrap_or_default(),
        )
        .with_joined_date(parse_json_date(record.joined.as_deref()))
        .with_birth_date(parse_json_date(record.birth_date.as_deref()))
    }
}

/// Parses JSON text into candidate employees
///
/// A top-level `null` yields no records.
///
/// # Errors
///
/// Returns [`ParseError::InvalidJson`] when the text is not an array of
/// objects.
pub fn parse_json(content: &str) -> Result<Vec<Employee>, ParseError> {
    let records: Option<Vec<JsonEmployeeRecord>> =
        serde_json::from_str(content).map_err(|e| ParseError::InvalidJson(e.to_string()))?;

    Ok(records
        .unwrap_or_default()
        .into_iter()
        .map(Employee::from)
        .collect())
}
