//! Test fixtures and sample data.
//!
//! This module provides pre-populated services matching the sample records
//! used across the integration tests.

#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use record_services::{
    Appointment, AppointmentService, Contact, ContactService, Task, TaskService,
};

/// Create a sample contact with fixed name, phone and address.
pub fn sample_contact(id: &str) -> Contact {
    Contact::new(id, "Alice", "Smith", "1234567890", "123 Main St").unwrap()
}

/// Contact service holding "C1" (Alice Smith) and "C2" (Bob Jones).
pub fn contact_service() -> ContactService {
    let mut service = ContactService::new();
    service
        .add(Contact::new("C1", "Alice", "Smith", "1234567890", "123 Main St").unwrap())
        .unwrap();
    service
        .add(Contact::new("C2", "Bob", "Jones", "0987654321", "456 Oak Ave").unwrap())
        .unwrap();
    service
}

/// Task service holding three tasks with IDs "1", "2" and "3".
pub fn task_service() -> TaskService {
    let mut service = TaskService::new();
    service
        .add(Task::new("1", "Write Report", "Complete project report by Monday").unwrap())
        .unwrap();
    service
        .add(Task::new("2", "Code Review", "Review the pull requests for bug fixes").unwrap())
        .unwrap();
    service
        .add(Task::new("3", "Meeting", "Team sync-up meeting on Wednesday").unwrap())
        .unwrap();
    service
}

/// A date `days` days from now.
pub fn days_from_now(days: i64) -> DateTime<Utc> {
    Utc::now() + Duration::days(days)
}

/// Appointment service holding "A1" (doctor), "A2" (HR meeting) and "A3" (demo).
pub fn appointment_service() -> AppointmentService {
    let mut service = AppointmentService::new();
    service
        .add(Appointment::new("A1", days_from_now(1), "Doctor appointment").unwrap())
        .unwrap();
    service
        .add(Appointment::new("A2", days_from_now(2), "Team meeting with HR").unwrap())
        .unwrap();
    service
        .add(Appointment::new("A3", days_from_now(2), "Project demo presentation").unwrap())
        .unwrap();
    service
}
