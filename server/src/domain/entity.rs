//! Stored entities and domain errors

use thiserror::Error;

/// Anything kept in an ordered collection
pub trait Entity: Sized + Send + Sync + Clone {
    type Id: Clone + Eq + std::hash::Hash + Send + Sync;

    fn id(&self) -> &Self::Id;
}

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Clone, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// Submitted order is not a permutation of the stored ids
    #[error("Invalid order: {0}")]
    InvalidOrder(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<rusqlite::Error> for DomainError {
    fn from(e: rusqlite::Error) -> Self {
        DomainError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Storage(format!("corrupt attributes: {}", e))
    }
}
