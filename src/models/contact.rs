//! Contact model representing a person in the address book.

use crate::domain::text::bounded;
use crate::domain::{PhoneNumber, RecordId, ValidationError};
use crate::repositories::{Record, RecordKind};
use serde::Serialize;
use std::hash::{Hash, Hasher};

/// Maximum length of a first name.
pub const MAX_FIRST_NAME_LEN: usize = 10;
/// Maximum length of a last name.
pub const MAX_LAST_NAME_LEN: usize = 10;
/// Maximum length of a street address.
pub const MAX_ADDRESS_LEN: usize = 30;

/// A contact with an immutable ID and validated name, phone and address.
///
/// Two contacts are equal when their IDs are equal, regardless of the other
/// fields.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Unique identifier, fixed at construction
    #[serde(rename = "contactId")]
    id: RecordId,

    /// First name (at most 10 characters)
    first_name: String,

    /// Last name (at most 10 characters)
    last_name: String,

    /// Phone number (exactly 10 digits)
    phone: PhoneNumber,

    /// Street address (at most 30 characters)
    address: String,
}

impl Contact {
    /// Create a new contact, validating every field.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` encountered; no contact is built.
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: RecordId::new(id)?,
            first_name: bounded("first name", first_name, MAX_FIRST_NAME_LEN)?,
            last_name: bounded("last name", last_name, MAX_LAST_NAME_LEN)?,
            phone: PhoneNumber::new(phone)?,
            address: bounded("address", address, MAX_ADDRESS_LEN)?,
        })
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn phone(&self) -> &str {
        self.phone.as_str()
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) -> Result<(), ValidationError> {
        self.first_name = bounded("first name", first_name, MAX_FIRST_NAME_LEN)?;
        Ok(())
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) -> Result<(), ValidationError> {
        self.last_name = bounded("last name", last_name, MAX_LAST_NAME_LEN)?;
        Ok(())
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        self.phone = PhoneNumber::new(phone)?;
        Ok(())
    }

    pub fn set_address(&mut self, address: impl Into<String>) -> Result<(), ValidationError> {
        self.address = bounded("address", address, MAX_ADDRESS_LEN)?;
        Ok(())
    }

    /// Replace all mutable fields at once.
    ///
    /// Every value is validated before any is written, so on error the
    /// contact is unchanged.
    pub fn update_fields(
        &mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let first_name = bounded("first name", first_name, MAX_FIRST_NAME_LEN)?;
        let last_name = bounded("last name", last_name, MAX_LAST_NAME_LEN)?;
        let phone = PhoneNumber::new(phone)?;
        let address = bounded("address", address, MAX_ADDRESS_LEN)?;

        self.first_name = first_name;
        self.last_name = last_name;
        self.phone = phone;
        self.address = address;
        Ok(())
    }
}

impl PartialEq for Contact {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Contact {}

impl Hash for Contact {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Record for Contact {
    const KIND: RecordKind = RecordKind::Contact;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.address.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Contact {
        Contact::new("C1", "Alice", "Smith", "1234567890", "123 Main St").unwrap()
    }

    #[test]
    fn test_contact_new_valid() {
        let contact = alice();
        assert_eq!(contact.id().as_str(), "C1");
        assert_eq!(contact.first_name(), "Alice");
        assert_eq!(contact.last_name(), "Smith");
        assert_eq!(contact.phone(), "1234567890");
        assert_eq!(contact.address(), "123 Main St");
    }

    #[test]
    fn test_contact_fields_at_max_length() {
        let contact = Contact::new(
            "1234567890",
            "Abcdefghij",
            "Klmnopqrst",
            "0987654321",
            "123456789012345678901234567890",
        )
        .unwrap();
        assert_eq!(contact.first_name().len(), MAX_FIRST_NAME_LEN);
        assert_eq!(contact.address().len(), MAX_ADDRESS_LEN);
    }

    #[test]
    fn test_contact_new_rejects_invalid_fields() {
        assert_eq!(
            Contact::new("", "Alice", "Smith", "1234567890", "123 Main St"),
            Err(ValidationError::EmptyId)
        );
        assert!(Contact::new("12345678901", "Alice", "Smith", "1234567890", "x").is_err());
        assert!(Contact::new("C1", "Alexandrina", "Smith", "1234567890", "x").is_err());
        assert!(Contact::new("C1", "Alice", "Smitherson-Jones", "1234567890", "x").is_err());
        assert!(Contact::new("C1", "Alice", "Smith", "12345", "x").is_err());
        assert!(Contact::new("C1", "Alice", "Smith", "12345abcde", "x").is_err());
        assert!(Contact::new(
            "C1",
            "Alice",
            "Smith",
            "1234567890",
            "1234567890123456789012345678901"
        )
        .is_err());
    }

    #[test]
    fn test_contact_setters_validate() {
        let mut contact = alice();

        contact.set_first_name("Alicia").unwrap();
        contact.set_last_name("Smithers").unwrap();
        contact.set_phone("2223334444").unwrap();
        contact.set_address("987 Elm St").unwrap();
        assert_eq!(contact.first_name(), "Alicia");
        assert_eq!(contact.last_name(), "Smithers");
        assert_eq!(contact.phone(), "2223334444");
        assert_eq!(contact.address(), "987 Elm St");

        assert!(contact.set_first_name("Alexandrina").is_err());
        assert!(contact.set_phone("222-333-44").is_err());
        assert_eq!(contact.first_name(), "Alicia");
        assert_eq!(contact.phone(), "2223334444");
    }

    #[test]
    fn test_contact_update_fields_is_atomic() {
        let mut contact = alice();

        let result = contact.update_fields("Alicia", "Smithers", "not-phone", "987 Elm St");
        assert!(matches!(result, Err(ValidationError::InvalidPhone(_))));
        assert_eq!(contact.first_name(), "Alice");
        assert_eq!(contact.last_name(), "Smith");
        assert_eq!(contact.phone(), "1234567890");
        assert_eq!(contact.address(), "123 Main St");
    }

    #[test]
    fn test_contact_equality_uses_id_only() {
        let a = alice();
        let b = Contact::new("C1", "Bob", "Jones", "0987654321", "456 Oak Ave").unwrap();
        let c = Contact::new("C2", "Alice", "Smith", "1234567890", "123 Main St").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_contact_serialization() {
        let json = serde_json::to_value(alice()).unwrap();
        assert_eq!(json["contactId"], "C1");
        assert_eq!(json["firstName"], "Alice");
        assert_eq!(json["lastName"], "Smith");
        assert_eq!(json["phone"], "1234567890");
        assert_eq!(json["address"], "123 Main St");
    }
}
