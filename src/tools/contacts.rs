//! Contact tool operations.

use super::{absent_view, search_view, SearchParams};
use crate::error::RecordResult;
use crate::models::Contact;
use crate::services::ContactService;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{json, Value};

/// Parameters for adding a contact.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddContactParams {
    /// Unique contact ID (1-10 characters)
    pub contact_id: String,
    /// First name (at most 10 characters)
    pub first_name: String,
    /// Last name (at most 10 characters)
    pub last_name: String,
    /// Phone number (exactly 10 digits)
    pub phone: String,
    /// Street address (at most 30 characters)
    pub address: String,
}

/// Parameters for replacing every mutable field of a contact.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateContactParams {
    pub contact_id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ContactIdParams {
    pub contact_id: String,
}

pub fn add_contact(service: &mut ContactService, params: AddContactParams) -> RecordResult<Value> {
    let contact = Contact::new(
        params.contact_id,
        params.first_name,
        params.last_name,
        params.phone,
        params.address,
    )?;
    let view = json!({ "contact": &contact });
    service.add(contact)?;
    Ok(view)
}

pub fn get_contact(service: &ContactService, params: ContactIdParams) -> Value {
    match service.get(&params.contact_id) {
        Some(contact) => json!({ "found": true, "contact": contact }),
        None => absent_view(&params.contact_id),
    }
}

pub fn update_contact(
    service: &mut ContactService,
    params: UpdateContactParams,
) -> RecordResult<Value> {
    service.update(
        &params.contact_id,
        params.first_name,
        params.last_name,
        params.phone,
        params.address,
    )?;
    Ok(json!({ "contact": service.get(&params.contact_id) }))
}

pub fn delete_contact(service: &mut ContactService, params: ContactIdParams) -> RecordResult<Value> {
    service.delete(&params.contact_id)?;
    Ok(json!({ "deleted": params.contact_id }))
}

pub fn search_contacts(service: &ContactService, params: SearchParams, limit: usize) -> Value {
    search_view(&params.query, service.search(&params.query), limit)
}
