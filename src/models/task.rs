//! Task model.

use crate::domain::text::bounded;
use crate::domain::{RecordId, ValidationError};
use crate::repositories::{Record, RecordKind};
use serde::Serialize;

/// Maximum length of a task name.
pub const MAX_NAME_LEN: usize = 20;
/// Maximum length of a task description.
pub const MAX_DESCRIPTION_LEN: usize = 50;

/// A task with an immutable ID, a short name and a description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    /// Unique identifier, fixed at construction
    #[serde(rename = "taskId")]
    id: RecordId,

    /// Task name (at most 20 characters)
    name: String,

    /// Task description (at most 50 characters)
    description: String,
}

impl Task {
    /// Create a new task, validating every field.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: RecordId::new(id)?,
            name: bounded("name", name, MAX_NAME_LEN)?,
            description: bounded("description", description, MAX_DESCRIPTION_LEN)?,
        })
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        self.name = bounded("name", name, MAX_NAME_LEN)?;
        Ok(())
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), ValidationError> {
        self.description = bounded("description", description, MAX_DESCRIPTION_LEN)?;
        Ok(())
    }

    /// Replace name and description together; nothing changes on error.
    pub fn update_fields(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let name = bounded("name", name, MAX_NAME_LEN)?;
        let description = bounded("description", description, MAX_DESCRIPTION_LEN)?;

        self.name = name;
        self.description = description;
        Ok(())
    }
}

impl Record for Task {
    const KIND: RecordKind = RecordKind::Task;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }
}
