//! Domain Layer
//!
//! Stored entities and core abstractions.

mod entity;
mod record;

pub use entity::{DomainError, DomainResult, Entity};
pub use record::{CollectionKind, NewRecord, Record};
