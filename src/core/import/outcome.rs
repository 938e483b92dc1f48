//! Result of one import batch

use serde::Serialize;

/// Why a batch was turned away
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RejectionReason {
    /// At least one record failed field validation
    Validation,
    /// At least one record repeats another in the batch or the store
    Duplicate,
}

/// Outcome of [`super::ImportReconciler::handle`]
///
/// A rejected batch always has `added_count == 0` and at least one error
/// message; an accepted batch has no errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportOutcome {
    pub added_count: usize,
    pub errors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<RejectionReason>,
    /// `(original, assigned)` for every record stored under a new name
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub renamed: Vec<(String, String)>,
}

impl ImportOutcome {
    pub(crate) fn accepted(added_count: usize, renamed: Vec<(String, String)>) -> Self {
        Self {
            added_count,
            errors: Vec::new(),
            rejection: None,
            renamed,
        }
    }

    pub(crate) fn rejected(reason: RejectionReason, errors: Vec<String>) -> Self {
        Self {
            added_count: 0,
            errors,
            rejection: Some(reason),
            renamed: Vec::new(),
        }
    }

    /// True when the batch was committed
    pub fn is_success(&self) -> bool {
        self.rejection.is_none()
    }
}
