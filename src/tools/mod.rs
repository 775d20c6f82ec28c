//! Tool operations behind the MCP server.
//!
//! Each function takes a service plus deserialized tool parameters and
//! returns the JSON view sent back to the client. The functions are
//! synchronous; the server acquires the service lock before calling them.
//!
//! - **contacts**: add, get, update, delete and search contacts
//! - **tasks**: add, get, update, delete and search tasks
//! - **appointments**: add, get, update, delete and search appointments

pub mod appointments;
pub mod contacts;
pub mod tasks;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub use appointments::{AddAppointmentParams, AppointmentIdParams, UpdateAppointmentParams};
pub use contacts::{AddContactParams, ContactIdParams, UpdateContactParams};
pub use tasks::{AddTaskParams, TaskIdParams, UpdateTaskParams};

/// Parameters shared by every search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchParams {
    /// Case-insensitive substring to look for
    pub query: String,
}

/// Render search hits, keeping at most `limit` of them.
///
/// `result_count` always reports the full number of matches.
pub(crate) fn search_view<T: Serialize>(query: &str, hits: Vec<&T>, limit: usize) -> Value {
    let result_count = hits.len();
    let results: Vec<&T> = hits.into_iter().take(limit).collect();
    json!({
        "query": query,
        "result_count": result_count,
        "truncated": result_count > results.len(),
        "results": results,
    })
}

/// Render a lookup that found nothing.
pub(crate) fn absent_view(id: &str) -> Value {
    json!({ "found": false, "id": id })
}
