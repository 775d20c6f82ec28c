//! Domain value objects and field rules.
//!
//! This module contains type-safe wrappers for record identifiers and phone
//! numbers, plus the length rules shared by every entity's text fields.
//! Value objects validate at construction time, so an invalid value can
//! never be represented.

pub mod errors;
pub mod phone;
pub mod record_id;
pub mod text;

pub use errors::ValidationError;
pub use phone::PhoneNumber;
pub use record_id::{RecordId, MAX_ID_LEN};
