//! Result type alias for Roster

use super::errors::RosterError;

/// Result type alias for Roster operations
///
/// # Examples
///
/// ```
/// use roster::domain::result::Result;
/// use roster::domain::errors::RosterError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(RosterError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, RosterError>;
