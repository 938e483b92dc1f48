//! Domain error types
//!
//! This module defines the error hierarchy for Roster. Errors are
//! domain-specific and don't expose third-party driver types.
//!
//! Batch rejections from the importer (field validation, duplicate
//! detection) are not errors: they are reported through
//! [`crate::core::import::ImportOutcome`]. The types here cover failures
//! that stop a request outright.

use thiserror::Error;

/// Main Roster error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid caller input (e.g. bad paging arguments)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Upload payload could not be turned into candidate records
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Storage backend failure
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Requested record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Upload parsing errors
///
/// Raised while turning an uploaded file or text block into candidate
/// records, before the importer sees them.
#[derive(Debug, Error)]
pub enum ParseError {
    /// File extension is neither `.csv` nor `.json`
    #[error("Unsupported file format: {0}. Use .csv or .json")]
    UnsupportedExtension(String),

    /// Text format is neither `csv` nor `json`
    #[error("Unsupported format: {0}. Use 'csv' or 'json'")]
    UnsupportedFormat(String),

    /// JSON payload is not an array of employee objects
    #[error("Failed to parse JSON: {0}")]
    InvalidJson(String),

    /// Nothing usable in the payload
    #[error("No employees found in the provided data. Please upload a file or enter text content.")]
    EmptyPayload,

    /// Upload file could not be read
    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },
}

/// Storage backend errors
///
/// Errors that occur inside an [`crate::adapters::database::EmployeeStore`]
/// implementation. These are fatal to the request and never retried by the
/// importer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to connect to (or open) the backend
    #[error("Failed to connect to store: {0}")]
    ConnectionFailed(String),

    /// Read query failed
    #[error("Failed to query employees: {0}")]
    QueryFailed(String),

    /// Insert or commit failed; nothing from the batch was kept
    #[error("Failed to insert employees: {0}")]
    InsertFailed(String),

    /// File backend I/O failure
    #[error("Store I/O failure at {path}: {message}")]
    Io { path: String, message: String },

    /// Persisted data could not be decoded
    #[error("Stored data is corrupt: {0}")]
    Corrupt(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for RosterError {
    fn from(err: std::io::Error) -> Self {
        RosterError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        RosterError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for RosterError {
    fn from(err: toml::de::Error) -> Self {
        RosterError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_error_display() {
        let err = RosterError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_store_error_conversion() {
        let store_err = StoreError::ConnectionFailed("refused".to_string());
        let err: RosterError = store_err.into();
        assert!(matches!(err, RosterError::Store(_)));
        assert!(err.to_string().contains("refused"));
    }

    #[test]
    fn test_parse_error_conversion() {
        let err: RosterError = ParseError::UnsupportedExtension(".xml".to_string()).into();
        assert!(matches!(err, RosterError::Parse(_)));
        assert_eq!(
            err.to_string(),
            "Parse error: Unsupported file format: .xml. Use .csv or .json"
        );
    }

    #[test]
    fn test_empty_payload_message() {
        assert!(ParseError::EmptyPayload
            .to_string()
            .starts_with("No employees found"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: RosterError = io_err.into();
        assert!(matches!(err, RosterError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: RosterError = json_err.into();
        assert!(matches!(err, RosterError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: RosterError = toml_err.into();
        assert!(matches!(err, RosterError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        let _: &dyn std::error::Error = &RosterError::Validation("x".to_string());
        let _: &dyn std::error::Error = &StoreError::Corrupt("x".to_string());
        let _: &dyn std::error::Error = &ParseError::EmptyPayload;
    }
}
