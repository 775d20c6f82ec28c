//! Appointment model.
//!
//! The appointment date is set once at construction and must be strictly
//! after the instant the appointment is created. A date equal to "now" is
//! rejected.

use crate::domain::text::bounded;
use crate::domain::{RecordId, ValidationError};
use crate::repositories::{Record, RecordKind};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Maximum length of an appointment description.
pub const MAX_DESCRIPTION_LEN: usize = 50;

/// Parse an RFC 3339 timestamp into a UTC appointment date.
///
/// # Errors
///
/// Returns `ValidationError::InvalidDate` when the text is not RFC 3339.
pub fn parse_appointment_date(text: &str) -> Result<DateTime<Utc>, ValidationError> {
    DateTime::parse_from_rfc3339(text.trim())
        .map(|date| date.with_timezone(&Utc))
        .map_err(|_| ValidationError::InvalidDate(text.to_string()))
}

/// An appointment with an immutable ID and date and a mutable description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Unique identifier, fixed at construction
    #[serde(rename = "appointmentId")]
    id: RecordId,

    /// When the appointment takes place, fixed at construction
    appointment_date: DateTime<Utc>,

    /// Description (at most 50 characters)
    description: String,
}

impl Appointment {
    /// Create a new appointment, checking the date against the system clock.
    pub fn new(
        id: impl Into<String>,
        date: DateTime<Utc>,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::new_at(id, date, description, Utc::now())
    }

    /// Create a new appointment, checking the date against `now`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::DateNotInFuture` unless `date > now`, plus
    /// the usual ID and description errors.
    pub fn new_at(
        id: impl Into<String>,
        date: DateTime<Utc>,
        description: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let id = RecordId::new(id)?;
        if date <= now {
            return Err(ValidationError::DateNotInFuture(date.to_rfc3339()));
        }
        let description = bounded("description", description, MAX_DESCRIPTION_LEN)?;

        Ok(Self {
            id,
            appointment_date: date,
            description,
        })
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn appointment_date(&self) -> DateTime<Utc> {
        self.appointment_date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), ValidationError> {
        self.description = bounded("description", description, MAX_DESCRIPTION_LEN)?;
        Ok(())
    }
}

impl Record for Appointment {
    const KIND: RecordKind = RecordKind::Appointment;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.description.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_appointment_new_valid() {
        let date = Utc::now() + Duration::days(1);
        let appt = Appointment::new("A1", date, "Doctor appointment").unwrap();
        assert_eq!(appt.id().as_str(), "A1");
        assert_eq!(appt.appointment_date(), date);
        assert_eq!(appt.description(), "Doctor appointment");
    }

    #[test]
    fn test_appointment_rejects_past_date() {
        let date = Utc::now() - Duration::seconds(100);
        let result = Appointment::new("A1", date, "Doctor appointment");
        assert!(matches!(result, Err(ValidationError::DateNotInFuture(_))));
    }

    #[test]
    fn test_appointment_rejects_date_equal_to_now() {
        let now = Utc::now();
        let result = Appointment::new_at("A1", now, "Doctor appointment", now);
        assert!(matches!(result, Err(ValidationError::DateNotInFuture(_))));
    }

    #[test]
    fn test_appointment_accepts_one_millisecond_after_now() {
        let now = Utc::now();
        let date = now + Duration::milliseconds(1);
        assert!(Appointment::new_at("A1", date, "Doctor appointment", now).is_ok());
    }

    #[test]
    fn test_appointment_rejects_invalid_id_and_description() {
        let date = Utc::now() + Duration::days(1);
        assert_eq!(
            Appointment::new("", date, "x"),
            Err(ValidationError::EmptyId)
        );
        assert!(Appointment::new("12345678901", date, "x").is_err());
        assert!(Appointment::new(
            "A1",
            date,
            "This description is way too long and exceeds the 50 character limit!"
        )
        .is_err());
    }

    #[test]
    fn test_appointment_description_at_max_length() {
        let date = Utc::now() + Duration::days(1);
        let description = "d".repeat(MAX_DESCRIPTION_LEN);
        assert!(Appointment::new("A1", date, description).is_ok());
    }

    #[test]
    fn test_appointment_set_description() {
        let date = Utc::now() + Duration::days(1);
        let mut appt = Appointment::new("A1", date, "Doctor appointment").unwrap();

        appt.set_description("Dentist appointment").unwrap();
        assert_eq!(appt.description(), "Dentist appointment");

        assert!(appt.set_description("d".repeat(51)).is_err());
        assert_eq!(appt.description(), "Dentist appointment");
        assert_eq!(appt.appointment_date(), date);
    }

    #[test]
    fn test_parse_appointment_date() {
        let date = parse_appointment_date("2099-06-01T09:30:00+02:00").unwrap();
        assert_eq!(date.to_rfc3339(), "2099-06-01T07:30:00+00:00");

        assert_eq!(
            parse_appointment_date("next tuesday"),
            Err(ValidationError::InvalidDate("next tuesday".to_string()))
        );
        assert!(parse_appointment_date("").is_err());
    }

    #[test]
    fn test_appointment_serialization() {
        let date = DateTime::parse_from_rfc3339("2099-01-02T03:04:05Z")
            .unwrap()
            .with_timezone(&Utc);
        let appt = Appointment::new("A1", date, "Doctor appointment").unwrap();
        let json = serde_json::to_value(&appt).unwrap();
        assert_eq!(json["appointmentId"], "A1");
        assert_eq!(json["appointmentDate"], "2099-01-02T03:04:05Z");
        assert_eq!(json["description"], "Doctor appointment");
    }
}
