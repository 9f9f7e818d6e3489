//! Wire Types
//!
//! JSON bodies exchanged with the read and write endpoints. The reference
//! server uses the same types.

use serde::{Deserialize, Serialize};

/// Body of `PATCH <patchUrl>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderRequest {
    #[serde(rename = "orderedIds")]
    pub ordered_ids: Vec<String>,
}

/// Response envelope used by both endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reorder_request_field_name() {
        let body = ReorderRequest { ordered_ids: vec!["b".into(), "c".into(), "a".into()] };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "orderedIds": ["b", "c", "a"] })
        );
    }

    #[test]
    fn test_response_without_success_field_is_failure() {
        let resp: ApiResponse<serde_json::Value> = serde_json::from_str(r#"{"message":"?"}"#).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.message.as_deref(), Some("?"));
    }
}
