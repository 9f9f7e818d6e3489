//! Repository Layer
//!
//! Data access abstractions and implementations.

mod db;
mod record_positioning;
mod record_repo;
mod traits;

#[cfg(test)]
mod tests;

pub use db::{init_db, DbState, SharedConnection};
pub use record_repo::RecordRepository;
pub use traits::{CollectionRepository, PositioningRepository};
