use crate::domain::RecordId;
use serde::Serialize;
use std::fmt;

/// The closed set of record types the services manage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Contact,
    Task,
    Appointment,
}

impl RecordKind {
    /// Human-readable name, used in error messages and logs.
    pub fn display_name(&self) -> &'static str {
        match self {
            RecordKind::Contact => "Contact",
            RecordKind::Task => "Task",
            RecordKind::Appointment => "Appointment",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// An entity that can live in an identity-keyed repository.
///
/// Implementors expose their immutable identifier and the text fields that
/// substring search should look at.
pub trait Record {
    /// The record type, used when reporting duplicate or missing IDs.
    const KIND: RecordKind;

    /// The immutable identifier of this record.
    fn id(&self) -> &RecordId;

    /// Text fields examined by case-insensitive substring search.
    fn searchable_fields(&self) -> Vec<&str>;
}
