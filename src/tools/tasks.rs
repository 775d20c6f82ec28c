//! Task tool operations.

use super::{absent_view, search_view, SearchParams};
use crate::error::RecordResult;
use crate::models::Task;
use crate::services::TaskService;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{json, Value};

/// Parameters for adding a task.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddTaskParams {
    /// Unique task ID (1-10 characters)
    pub task_id: String,
    /// Task name (at most 20 characters)
    pub name: String,
    /// Task description (at most 50 characters)
    pub description: String,
}

/// Parameters for replacing a task's name and description.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateTaskParams {
    pub task_id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TaskIdParams {
    pub task_id: String,
}

pub fn add_task(service: &mut TaskService, params: AddTaskParams) -> RecordResult<Value> {
    let task = Task::new(params.task_id, params.name, params.description)?;
    let view = json!({ "task": &task });
    service.add(task)?;
    Ok(view)
}

pub fn get_task(service: &TaskService, params: TaskIdParams) -> Value {
    match service.get(&params.task_id) {
        Some(task) => json!({ "found": true, "task": task }),
        None => absent_view(&params.task_id),
    }
}

pub fn update_task(service: &mut TaskService, params: UpdateTaskParams) -> RecordResult<Value> {
    service.update(&params.task_id, params.name, params.description)?;
    Ok(json!({ "task": service.get(&params.task_id) }))
}

pub fn delete_task(service: &mut TaskService, params: TaskIdParams) -> RecordResult<Value> {
    service.delete(&params.task_id)?;
    Ok(json!({ "deleted": params.task_id }))
}

pub fn search_tasks(service: &TaskService, params: SearchParams, limit: usize) -> Value {
    search_view(&params.query, service.search(&params.query), limit)
}
