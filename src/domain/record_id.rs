//! RecordId value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;

/// Maximum length of any record identifier, in characters.
pub const MAX_ID_LEN: usize = 10;

/// A type-safe wrapper for record identifiers.
///
/// Identifiers are validated at construction time: they cannot be empty and
/// cannot exceed [`MAX_ID_LEN`] characters. There is no way to change the
/// value once constructed.
///
/// # Example
///
/// ```
/// use record_services::domain::RecordId;
///
/// let id = RecordId::new("C1").unwrap();
/// assert_eq!(id.as_str(), "C1");
/// assert!(RecordId::new("").is_err());
/// assert!(RecordId::new("12345678901").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(String);

impl RecordId {
    /// Create a new RecordId.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyId` for an empty string and
    /// `ValidationError::IdTooLong` when over [`MAX_ID_LEN`] characters.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::EmptyId);
        }
        let actual = id.chars().count();
        if actual > MAX_ID_LEN {
            return Err(ValidationError::IdTooLong {
                max: MAX_ID_LEN,
                actual,
            });
        }
        Ok(Self(id))
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Lets repositories look up `HashMap<RecordId, _>` entries with a plain `&str`.
impl Borrow<str> for RecordId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Serialize for RecordId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RecordId::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
