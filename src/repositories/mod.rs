//! Identity-keyed record storage.
//!
//! The [`Record`] trait describes what a store needs from an entity; the
//! [`InMemoryRepository`] is the map-backed store each service owns.

mod in_memory;
mod traits;

pub use in_memory::InMemoryRepository;
pub use traits::{Record, RecordKind};
