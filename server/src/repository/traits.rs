//! Repository Layer - Core Traits
//!
//! Abstract interfaces for collection storage.
//! The SQLite implementation lives next door; tests use an in-memory database.

use async_trait::async_trait;

use crate::domain::{CollectionKind, DomainResult, Entity};

/// Read/create access to one entity type, scoped by collection
#[async_trait]
pub trait CollectionRepository<T: Entity>: Send + Sync {
    type NewEntity: Send + Sync;

    /// Create an entity at the end of its collection
    async fn create(&self, collection: CollectionKind, entity: &Self::NewEntity) -> DomainResult<T>;

    /// All entities of a collection, by position
    async fn list(&self, collection: CollectionKind) -> DomainResult<Vec<T>>;
}

/// Position management for ordered collections
#[async_trait]
pub trait PositioningRepository<T: Entity>: Send + Sync {
    /// Rewrite every position of a collection. `ordered_ids` leads; stored
    /// ids it omits keep their relative order after it. All-or-nothing.
    async fn apply_order(&self, collection: CollectionKind, ordered_ids: &[T::Id]) -> DomainResult<()>;
}
