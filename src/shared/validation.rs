//! Validation Utilities

use super::error::AppError;

/// Require a non-blank string field.
///
/// A missing value and a whitespace-only value are both rejected, matching
/// the API contract where blank and absent names are equivalent.
pub fn require_text(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(AppError::Validation(format!("{} is required", field))),
    }
}
