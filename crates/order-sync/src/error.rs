//! Sync error types

use thiserror::Error;

/// Errors raised while loading or saving an ordered collection
#[derive(Debug, Error)]
pub enum SyncError {
    /// Transport failure (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Body could not be understood
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Server answered non-2xx or `success: false`
    #[error("{message}")]
    Rejected {
        /// HTTP status when it was not a success
        status: Option<u16>,
        message: String,
    },

    /// Local role gate failed before any request was made
    #[error("{} privileges required", capitalize(.required))]
    AuthorizationDenied { required: String },

    /// Token or role cannot be sent as a header
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    /// Another save for this collection has not finished yet
    #[error("A save is already in progress")]
    SaveInFlight,

    /// Save attempted before the collection finished loading
    #[error("Collection is still loading")]
    StillLoading,

    /// Nothing to persist
    #[error("There are no items to save")]
    EmptyCollection,

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SyncError {
    pub fn is_authorization(&self) -> bool {
        matches!(self, SyncError::AuthorizationDenied { .. })
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Result type for sync operations
pub type SyncResult<T> = Result<T, SyncError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_message() {
        let err = SyncError::AuthorizationDenied { required: "admin".to_string() };
        assert_eq!(err.to_string(), "Admin privileges required");
        assert!(err.is_authorization());
    }

    #[test]
    fn test_rejected_shows_server_message() {
        let err = SyncError::Rejected { status: None, message: "DB error".to_string() };
        assert_eq!(err.to_string(), "DB error");
    }
}
