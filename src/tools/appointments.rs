//! Appointment tool operations.

use super::{absent_view, search_view, SearchParams};
use crate::error::RecordResult;
use crate::models::{parse_appointment_date, Appointment};
use crate::services::AppointmentService;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{json, Value};

/// Parameters for adding an appointment.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddAppointmentParams {
    /// Unique appointment ID (1-10 characters)
    pub appointment_id: String,
    /// RFC 3339 timestamp strictly in the future, e.g. 2030-01-31T15:00:00Z
    pub appointment_date: String,
    /// Description (at most 50 characters)
    pub description: String,
}

/// Parameters for replacing an appointment's description.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateAppointmentParams {
    pub appointment_id: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AppointmentIdParams {
    pub appointment_id: String,
}

pub fn add_appointment(
    service: &mut AppointmentService,
    params: AddAppointmentParams,
) -> RecordResult<Value> {
    let date = parse_appointment_date(&params.appointment_date)?;
    let appointment = Appointment::new(params.appointment_id, date, params.description)?;
    let view = json!({ "appointment": &appointment });
    service.add(appointment)?;
    Ok(view)
}

pub fn get_appointment(service: &AppointmentService, params: AppointmentIdParams) -> Value {
    match service.get(&params.appointment_id) {
        Some(appointment) => json!({ "found": true, "appointment": appointment }),
        None => absent_view(&params.appointment_id),
    }
}

pub fn update_appointment(
    service: &mut AppointmentService,
    params: UpdateAppointmentParams,
) -> RecordResult<Value> {
    service.update(&params.appointment_id, params.description)?;
    Ok(json!({ "appointment": service.get(&params.appointment_id) }))
}

pub fn delete_appointment(
    service: &mut AppointmentService,
    params: AppointmentIdParams,
) -> RecordResult<Value> {
    service.delete(&params.appointment_id)?;
    Ok(json!({ "deleted": params.appointment_id }))
}

pub fn search_appointments(
    service: &AppointmentService,
    params: SearchParams,
    limit: usize,
) -> Value {
    search_view(&params.query, service.search(&params.query), limit)
}
