//! Contact service layer.
//!
//! Owns the contact store and enforces ID uniqueness.

use crate::error::RecordResult;
use crate::models::Contact;
use crate::repositories::InMemoryRepository;
use tracing::{debug, warn};

/// Identity-keyed collection of contacts.
#[derive(Debug, Default)]
pub struct ContactService {
    contacts: InMemoryRepository<Contact>,
}

impl ContactService {
    /// Create an empty contact service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a contact, taking ownership of it.
    ///
    /// Fails with `DuplicateIdentifier` if the ID is already present.
    pub fn add(&mut self, contact: Contact) -> RecordResult<()> {
        let id = contact.id().clone();
        self.contacts.insert(contact).inspect_err(|e| {
            warn!(contact_id = %id, error = %e, "Rejected contact add");
        })?;
        debug!(contact_id = %id, "Contact added");
        Ok(())
    }

    /// Remove the contact with `id`.
    pub fn delete(&mut self, id: &str) -> RecordResult<()> {
        self.contacts.remove(id)?;
        debug!(contact_id = %id, "Contact deleted");
        Ok(())
    }

    /// Replace every mutable field of the stored contact.
    ///
    /// All values are validated before any is applied; on error the stored
    /// contact keeps its previous values.
    pub fn update(
        &mut self,
        id: &str,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> RecordResult<()> {
        let contact = self.contacts.get_mut(id)?;
        contact.update_fields(first_name, last_name, phone, address)?;
        debug!(contact_id = %id, "Contact updated");
        Ok(())
    }

    /// Get the contact with `id`, or `None` when absent.
    pub fn get(&self, id: &str) -> Option<&Contact> {
        self.contacts.get(id)
    }

    /// Contacts whose first name, last name or address contain `query`,
    /// ignoring case. An empty query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&Contact> {
        self.contacts.search(query)
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}
