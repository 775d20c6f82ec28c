//! Length rules for free-text fields.

use super::errors::ValidationError;

/// Check that `value` is at most `max` characters long.
///
/// Length is counted in Unicode scalar values. Empty strings pass.
pub fn check_max_len(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::FieldTooLong { field, max, actual });
    }
    Ok(())
}

/// Validate and take ownership of a bounded text value.
pub fn bounded(
    field: &'static str,
    value: impl Into<String>,
    max: usize,
) -> Result<String, ValidationError> {
    let value = value.into();
    check_max_len(field, &value, max)?;
    Ok(value)
}

/// Case-insensitive substring containment.
///
/// `needle_lower` must already be lower-cased.
pub fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
