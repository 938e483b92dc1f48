//! Field-level validation of candidate employee records
//!
//! Rules are evaluated independently, so one record can carry an error for
//! each of its failing fields. Telephone and birth date are unconstrained.

use crate::domain::Employee;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is a valid regex")
});

/// Employee field a validation rule applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    JoinedDate,
}

impl Field {
    /// Field name as used in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::JoinedDate => "joinedDate",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single failed rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validates one employee, returning every failed rule (empty = valid)
pub fn validate(employee: &Employee) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if employee.name.trim().is_empty() {
        errors.push(FieldError::new(Field::Name, "Name is required."));
    }

    if employee.email.trim().is_empty() {
        errors.push(FieldError::new(Field::Email, "Email is required."));
    } else if !EMAIL_PATTERN.is_match(&employee.email) {
        errors.push(FieldError::new(
            Field::Email,
            format!("Invalid email format: '{}'.", employee.email),
        ));
    }

    if employee.joined_date.is_none() {
        errors.push(FieldError::new(
            Field::JoinedDate,
            "Joined date is required and must be a valid date (yyyy.MM.dd or yyyy-MM-dd).",
        ));
    }

    errors
}

/// Validates a batch
///
/// Returns the errors of every failing record keyed by its zero-based
/// position; records without errors are absent. Iteration order follows
/// input order.
pub fn validate_batch(employees: &[Employee]) -> BTreeMap<usize, Vec<FieldError>> {
    employees
        .iter()
        .enumerate()
        .filter_map(|(index, employee)| {
            let errors = validate(employee);
            (!errors.is_empty()).then_some((index, errors))
        })
        .collect()
}
