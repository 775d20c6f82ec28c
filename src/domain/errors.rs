//! Domain validation errors.

use std::fmt;

/// Errors that can occur while validating an entity field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided identifier is empty.
    EmptyId,

    /// The provided identifier is longer than allowed.
    IdTooLong { max: usize, actual: usize },

    /// A text field is longer than allowed.
    FieldTooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The appointment date could not be parsed.
    InvalidDate(String),

    /// The appointment date is not strictly after the current instant.
    DateNotInFuture(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "ID cannot be empty"),
            Self::IdTooLong { max, actual } => {
                write!(f, "ID is {} characters long (max {})", actual, max)
            }
            Self::FieldTooLong { field, max, actual } => write!(
                f,
                "{} is {} characters long (max {})",
                field, actual, max
            ),
            Self::InvalidPhone(phone) => {
                write!(f, "Invalid phone number (expected 10 digits): {}", phone)
            }
            Self::InvalidDate(date) => {
                write!(f, "Invalid appointment date (expected RFC 3339): {}", date)
            }
            Self::DateNotInFuture(date) => {
                write!(f, "Appointment date must be in the future: {}", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(ValidationError::EmptyId.to_string(), "ID cannot be empty");

        let err = ValidationError::FieldTooLong {
            field: "first name",
            max: 10,
            actual: 11,
        };
        assert_eq!(err.to_string(), "first name is 11 characters long (max 10)");

        let err = ValidationError::InvalidPhone("555-1234".to_string());
        assert!(err.to_string().contains("555-1234"));
    }
}
