//! Validated record entities.
//!
//! Each entity has an immutable identifier and mutable fields that are
//! re-validated on every write. Construction fails atomically: an invalid
//! input never yields a partially built entity.

pub mod appointment;
pub mod contact;
pub mod task;

pub use appointment::{parse_appointment_date, Appointment};
pub use contact::Contact;
pub use task::Task;
