//! Employee contact record
//!
//! An employee is identified by name alone, compared case-insensitively.
//! Dates are optional: `None` is the "unset" value produced when an upload
//! omits a date or carries one that could not be parsed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Employee contact record
///
/// # Examples
///
/// ```
/// use roster::domain::Employee;
/// use chrono::NaiveDate;
///
/// let alice = Employee::new("Alice", "alice@example.com", "010-0001")
///     .with_joined_date(NaiveDate::from_ymd_opt(2022, 3, 15));
///
/// assert_eq!(alice.name_key().as_str(), "alice");
/// assert!(alice.joined_date.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Display name, unique per directory ignoring case
    pub name: String,

    /// Contact email
    #[serde(default)]
    pub email: String,

    /// Telephone number, free-form
    #[serde(default)]
    pub telephone: String,

    /// Date the employee joined; `None` when unset
    #[serde(default)]
    pub joined_date: Option<NaiveDate>,

    /// Date of birth; `None` when unset
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
}

impl Employee {
    /// Creates an employee with both dates unset
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        telephone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            telephone: telephone.into(),
            joined_date: None,
            birth_date: None,
        }
    }

    /// Sets the joined date
    pub fn with_joined_date(mut self, date: Option<NaiveDate>) -> Self {
        self.joined_date = date;
        self
    }

    /// Sets the birth date
    pub fn with_birth_date(mut self, date: Option<NaiveDate>) -> Self {
        self.birth_date = date;
        self
    }

    /// Returns a copy carrying a different name
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Case-insensitive storage key for this employee's name
    pub fn name_key(&self) -> NameKey {
        NameKey::new(&self.name)
    }

    /// Case-insensitive `name|email|telephone` key used for exact-duplicate detection
    pub fn identity_key(&self) -> String {
        format!(
            "{}|{}|{}",
            self.name.to_lowercase(),
            self.email.to_lowercase(),
            self.telephone.to_lowercase()
        )
    }

    /// True when name, email and telephone all match ignoring case
    pub fn same_identity(&self, other: &Employee) -> bool {
        eq_ignore_case(&self.name, &other.name)
            && eq_ignore_case(&self.email, &other.email)
            && eq_ignore_case(&self.telephone, &other.telephone)
    }
}

/// Case-insensitive name key
///
/// Every backend stores, orders and looks up employees by this key, so all
/// of them agree on what "the same name" means and on listing order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NameKey(String);

impl NameKey {
    /// Derives the key for a name
    pub fn new(name: &str) -> Self {
        Self(name.to_lowercase())
    }

    /// Returns the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NameKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}
