//! Appointment service layer.

use crate::error::RecordResult;
use crate::models::Appointment;
use crate::repositories::InMemoryRepository;
use tracing::{debug, warn};

/// Identity-keyed collection of appointments.
#[derive(Debug, Default)]
pub struct AppointmentService {
    appointments: InMemoryRepository<Appointment>,
}

impl AppointmentService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an appointment. Fails with `DuplicateIdentifier` if the ID is taken.
    pub fn add(&mut self, appointment: Appointment) -> RecordResult<()> {
        let id = appointment.id().clone();
        self.appointments.insert(appointment).inspect_err(|e| {
            warn!(appointment_id = %id, error = %e, "Rejected appointment add");
        })?;
        debug!(appointment_id = %id, "Appointment added");
        Ok(())
    }

    pub fn delete(&mut self, id: &str) -> RecordResult<()> {
        self.appointments.remove(id)?;
        debug!(appointment_id = %id, "Appointment deleted");
        Ok(())
    }

    /// Replace the description of the stored appointment. The date never changes.
    pub fn update(&mut self, id: &str, description: impl Into<String>) -> RecordResult<()> {
        self.appointments.get_mut(id)?.set_description(description)?;
        debug!(appointment_id = %id, "Appointment updated");
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Appointment> {
        self.appointments.get(id)
    }

    /// Appointments whose description contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<&Appointment> {
        self.appointments.search(query)
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecordError;
    use chrono::{Duration, Utc};

    fn service() -> AppointmentService {
        let mut service = AppointmentService::new();
        service
            .add(Appointment::new("A1", Utc::now() + Duration::days(1), "Doctor appointment").unwrap())
            .unwrap();
        service
    }

    #[test]
    fn test_add_duplicate_keeps_original() {
        let mut service = service();
        let duplicate =
            Appointment::new("A1", Utc::now() + Duration::days(3), "Other").unwrap();
        assert!(matches!(
            service.add(duplicate),
            Err(RecordError::DuplicateIdentifier { .. })
        ));
        assert_eq!(service.get("A1").unwrap().description(), "Doctor appointment");
        assert_eq!(service.len(), 1);
    }

    #[test]
    fn test_update_keeps_description_on_invalid_value() {
        let mut service = service();
        let result = service.update("A1", "d".repeat(51));
        assert!(matches!(result, Err(RecordError::InvalidArgument(_))));
        assert_eq!(service.get("A1").unwrap().description(), "Doctor appointment");
    }

    #[test]
    fn test_delete_then_update_missing() {
        let mut service = service();
        service.delete("A1").unwrap();
        assert!(service.is_empty());
        assert!(matches!(
            service.update("A1", "Dentist"),
            Err(RecordError::NotFound { .. })
        ));
    }
}
