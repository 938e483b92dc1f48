//! Upload payload assembly
//!
//! An upload carries an optional file and an optional block of pasted
//! text. Both are parsed and concatenated (file first) into the batch the
//! importer receives.

use super::{parse_csv, parse_json};
use crate::domain::{Employee, ParseError};
use std::path::Path;

/// Upload format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFormat {
    Csv,
    Json,
}

impl UploadFormat {
    /// Picks the format from a file name's extension (case-insensitive)
    pub fn from_file_name(file_name: &str) -> Result<Self, ParseError> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match extension.as_deref() {
            Some("csv") => Ok(UploadFormat::Csv),
            Some("json") => Ok(UploadFormat::Json),
            Some(other) => Err(ParseError::UnsupportedExtension(format!(".{other}"))),
            None => Err(ParseError::UnsupportedExtension("(none)".to_string())),
        }
    }

    /// Parses a text format name (case-insensitive); absent means CSV
    pub fn from_text_format(format: Option<&str>) -> Result<Self, ParseError> {
        let format = format.map(str::to_lowercase);
        match format.as_deref() {
            None | Some("csv") => Ok(UploadFormat::Csv),
            Some("json") => Ok(UploadFormat::Json),
            Some(other) => Err(ParseError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Parses content in this format
    pub fn parse(self, content: &str) -> Result<Vec<Employee>, ParseError> {
        match self {
            UploadFormat::Csv => Ok(parse_csv(content)),
            UploadFormat::Json => parse_json(content),
        }
    }
}

/// An uploaded file: original name plus content
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub content: String,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    /// Reads an upload from disk, keeping only the file name
    pub async fn read(path: &Path) -> Result<Self, ParseError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ParseError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self { file_name, content })
    }
}

/// A complete upload request
#[derive(Debug, Clone, Default)]
pub struct UploadPayload {
    pub file: Option<UploadFile>,
    pub text: Option<String>,
    pub format: Option<String>,
}

impl UploadPayload {
    pub fn with_file(mut self, file: UploadFile) -> Self {
        self.file = Some(file);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>, format: Option<String>) -> Self {
        self.text = Some(text.into());
        self.format = format;
        self
    }

    /// Parses every part of the payload into one batch
    ///
    /// # Errors
    ///
    /// Unsupported file extension or text format, malformed JSON, or a
    /// payload that yields no records at all.
    pub fn into_employees(self) -> Result<Vec<Employee>, ParseError> {
        let mut employees = Vec::new();

        if let Some(file) = self.file.filter(|f| !f.content.is_empty()) {
            let format = UploadFormat::from_file_name(&file.file_name)?;
            let parsed = format.parse(&file.content)?;
            tracing::debug!(file = %file.file_name, records = parsed.len(), "Parsed upload file");
            employees.extend(parsed);
        }

        if let Some(text) = self.text.filter(|t| !t.trim().is_empty()) {
            let format = UploadFormat::from_text_format(self.format.as_deref())?;
            let parsed = format.parse(&text)?;
            tracing::debug!(format = ?format, records = parsed.len(), "Parsed upload text");
            employees.extend(parsed);
        }

        if employees.is_empty() {
            return Err(ParseError::EmptyPayload);
        }

        Ok(employees)
    }
}
