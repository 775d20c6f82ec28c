//! Task service layer.

use crate::error::RecordResult;
use crate::models::Task;
use crate::repositories::InMemoryRepository;
use tracing::{debug, warn};

/// Identity-keyed collection of tasks.
#[derive(Debug, Default)]
pub struct TaskService {
    tasks: InMemoryRepository<Task>,
}

impl TaskService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a task. Fails with `DuplicateIdentifier` if the ID is taken.
    pub fn add(&mut self, task: Task) -> RecordResult<()> {
        let id = task.id().clone();
        self.tasks.insert(task).inspect_err(|e| {
            warn!(task_id = %id, error = %e, "Rejected task add");
        })?;
        debug!(task_id = %id, "Task added");
        Ok(())
    }

    pub fn delete(&mut self, id: &str) -> RecordResult<()> {
        self.tasks.remove(id)?;
        debug!(task_id = %id, "Task deleted");
        Ok(())
    }

    /// Replace name and description of the stored task, atomically.
    pub fn update(
        &mut self,
        id: &str,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> RecordResult<()> {
        self.tasks.get_mut(id)?.update_fields(name, description)?;
        debug!(task_id = %id, "Task updated");
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// Tasks whose name or description contain `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<&Task> {
        self.tasks.search(query)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
