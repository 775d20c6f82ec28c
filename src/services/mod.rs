//! Application service layer.
//!
//! One service per record type. Each service exclusively owns its records
//! in an identity-keyed repository and exposes add, delete, update, get and
//! search. Services are synchronous and unsynchronized; callers that share
//! one across tasks wrap it in a lock.

mod appointment_service;
mod contact_service;
mod task_service;

pub use appointment_service::AppointmentService;
pub use contact_service::ContactService;
pub use task_service::TaskService;

// Re-export the entities the services store
pub use crate::models::{Appointment, Contact, Task};
