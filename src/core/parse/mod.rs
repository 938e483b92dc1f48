//! Upload parsing
//!
//! Turns CSV or JSON text into candidate [`crate::domain::Employee`]
//! records. Parsing is lenient: malformed rows are skipped and bad dates
//! become unset, leaving it to validation to reject the batch.

pub mod csv;
pub mod dates;
pub mod json;
pub mod payload;

pub use csv::parse_csv;
pub use dates::{parse_csv_date, parse_json_date};
pub use json::parse_json;
pub use payload::{UploadFile, UploadFormat, UploadPayload};
