//! Authorization Context
//!
//! The `(token, role)` pair handed to the ordering component by its caller.
//! It is read-only here: this crate never issues, refreshes or validates
//! tokens.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use serde::{Deserialize, Serialize};

use crate::error::{SyncError, SyncResult};

/// Role required by the rearrange screens
pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationContext {
    pub token: Option<String>,
    pub role: Option<String>,
}

impl AuthorizationContext {
    pub fn new(token: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            role: Some(role.into()),
        }
    }

    /// No session at all
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_role(&self, role: &str) -> bool {
        self.role.as_deref() == Some(role)
    }

    /// Client-side gate run right before a save. A convenience only: the
    /// write endpoint still has to reject unauthorized callers itself.
    pub fn authorize(&self, required_role: &str) -> SyncResult<()> {
        if self.is_role(required_role) {
            Ok(())
        } else {
            Err(SyncError::AuthorizationDenied {
                required: required_role.to_string(),
            })
        }
    }

    /// Bearer token plus role hint, whichever are present
    pub fn headers(&self, role_header: &str) -> SyncResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &self.token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| SyncError::InvalidHeader("authorization token".to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }
        if let Some(role) = &self.role {
            let name = HeaderName::from_bytes(role_header.as_bytes())
                .map_err(|_| SyncError::InvalidHeader(role_header.to_string()))?;
            let value = HeaderValue::from_str(role)
                .map_err(|_| SyncError::InvalidHeader("role".to_string()))?;
            headers.insert(name, value);
        }
        Ok(headers)
    }
}
