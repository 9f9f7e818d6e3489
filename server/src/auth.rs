//! Server-side authorization
//!
//! The client's role check is a convenience only. Every write is re-checked
//! here: the bearer token is resolved through the session registry and the
//! resolved role decides. The role hint header is never trusted.

use std::collections::HashMap;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::AppError;
use crate::AppState;

/// Token -> role table issued by the surrounding session subsystem
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    roles: HashMap<String, String>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `token:role` pairs separated by commas; malformed pairs are skipped
    pub fn parse(pairs: &str) -> Self {
        let mut registry = Self::new();
        for pair in pairs.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            match pair.split_once(':') {
                Some((token, role)) if !token.trim().is_empty() && !role.trim().is_empty() => {
                    registry.insert(token.trim(), role.trim());
                }
                _ => tracing::warn!("Ignoring malformed session entry"),
            }
        }
        registry
    }

    pub fn insert(&mut self, token: impl Into<String>, role: impl Into<String>) {
        self.roles.insert(token.into(), role.into());
    }

    pub fn role_for(&self, token: &str) -> Option<&str> {
        self.roles.get(token).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

/// Caller resolved from the bearer token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub role: String,
}

impl CurrentUser {
    pub fn require_role(&self, role: &str) -> Result<(), AppError> {
        if self.role == role {
            Ok(())
        } else {
            let denied = order_sync::SyncError::AuthorizationDenied {
                required: role.to_string(),
            };
            Err(AppError::Forbidden(denied.to_string()))
        }
    }
}

fn extract_bearer(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(extract_bearer)
            .ok_or_else(|| {
                tracing::warn!(uri = %parts.uri, "Missing bearer token");
                AppError::Unauthorized
            })?;

        match state.sessions.role_for(token) {
            Some(role) => Ok(CurrentUser { role: role.to_string() }),
            None => {
                tracing::warn!(uri = %parts.uri, "Unknown bearer token");
                Err(AppError::Unauthorized)
            }
        }
    }
}
