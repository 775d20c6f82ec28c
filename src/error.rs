//! Error types for the record services.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use crate::repositories::RecordKind;
use thiserror::Error;

/// Errors returned by the record services.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A field violated its length or format rule
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    /// A record with the same identifier is already stored
    #[error("{kind} ID already exists: {id}")]
    DuplicateIdentifier { kind: RecordKind, id: String },

    /// No record with the identifier is stored
    #[error("{kind} ID not found: {id}")]
    NotFound { kind: RecordKind, id: String },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
