//! Integration tests for the contact service.

mod common;

use common::fixtures::*;
use record_services::{Contact, RecordError, RecordKind, ValidationError};

#[test]
fn test_add_then_get_returns_same_fields() {
    let mut service = contact_service();
    let contact = Contact::new("C3", "Charlie", "Brown", "5555555555", "789 Pine Rd").unwrap();
    let expected = contact.clone();

    service.add(contact).unwrap();

    let stored = service.get("C3").unwrap();
    assert_eq!(stored, &expected);
    assert_eq!(stored.first_name(), "Charlie");
    assert_eq!(stored.last_name(), "Brown");
    assert_eq!(stored.phone(), "5555555555");
    assert_eq!(stored.address(), "789 Pine Rd");
}

/// Adding a duplicate ID must fail and leave the stored contact untouched.
#[test]
fn test_add_duplicate_contact_fails() {
    let mut service = contact_service();
    let duplicate = Contact::new("C1", "Mallory", "Evil", "6666666666", "1 Bad Rd").unwrap();

    let err = service.add(duplicate).unwrap_err();
    assert_eq!(
        err,
        RecordError::DuplicateIdentifier {
            kind: RecordKind::Contact,
            id: "C1".to_string()
        }
    );

    let stored = service.get("C1").unwrap();
    assert_eq!(stored.first_name(), "Alice");
    assert_eq!(stored.phone(), "1234567890");
    assert_eq!(service.len(), 2);
}

#[test]
fn test_delete_contact() {
    let mut service = contact_service();
    service.delete("C2").unwrap();
    assert!(service.get("C2").is_none());
    assert_eq!(service.len(), 1);
}

#[test]
fn test_delete_nonexistent_contact_fails() {
    let mut service = contact_service();
    assert_eq!(
        service.delete("C999"),
        Err(RecordError::NotFound {
            kind: RecordKind::Contact,
            id: "C999".to_string()
        })
    );
}

#[test]
fn test_update_contact() {
    let mut service = contact_service();
    service
        .update("C1", "Alicia", "Smithers", "2223334444", "987 Elm St")
        .unwrap();

    let updated = service.get("C1").unwrap();
    assert_eq!(updated.first_name(), "Alicia");
    assert_eq!(updated.last_name(), "Smithers");
    assert_eq!(updated.phone(), "2223334444");
    assert_eq!(updated.address(), "987 Elm St");
}

#[test]
fn test_update_nonexistent_contact_fails() {
    let mut service = contact_service();
    let result = service.update("C999", "Test", "User", "0000000000", "Nowhere");
    assert!(matches!(result, Err(RecordError::NotFound { .. })));
}

/// A failing field in the middle of an update must not apply the fields
/// before it.
#[test]
fn test_update_with_invalid_field_changes_nothing() {
    let mut service = contact_service();

    let result = service.update("C1", "Alicia", "Smithers", "22233", "987 Elm St");
    assert_eq!(
        result,
        Err(RecordError::InvalidArgument(ValidationError::InvalidPhone(
            "22233".to_string()
        )))
    );

    let stored = service.get("C1").unwrap();
    assert_eq!(stored.first_name(), "Alice");
    assert_eq!(stored.last_name(), "Smith");
    assert_eq!(stored.phone(), "1234567890");
    assert_eq!(stored.address(), "123 Main St");
}

#[test]
fn test_update_accepts_values_at_max_length() {
    let mut service = contact_service();
    service
        .update(
            "C2",
            "Abcdefghij",
            "Klmnopqrst",
            "0000000000",
            "123456789012345678901234567890",
        )
        .unwrap();
    assert_eq!(service.get("C2").unwrap().address().chars().count(), 30);
}

#[test]
fn test_search_contacts() {
    let service = contact_service();

    let results = service.search("SMITH");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id().as_str(), "C1");

    assert!(service.search("").is_empty());
    assert!(service.search("Zed").is_empty());
}

#[test]
fn test_contact_lifecycle() {
    let mut service = contact_service();
    let contact = sample_contact("C9");

    service.add(contact).unwrap();
    assert!(service.get("C9").is_some());

    service.delete("C9").unwrap();
    assert!(service.get("C9").is_none());
    assert!(service.delete("C9").is_err());

    // Absent again, so it can be re-added
    service.add(sample_contact("C9")).unwrap();
    assert_eq!(service.len(), 3);
}
