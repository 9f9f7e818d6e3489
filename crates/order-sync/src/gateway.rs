//! Order Persistence Gateway
//!
//! Commits the full ordered id list to the write endpoint in a single
//! request. There is no partial-update variant and no retry.

use reqwest::header::CACHE_CONTROL;
use reqwest::Client;
use serde_json::Value;

use crate::auth::AuthorizationContext;
use crate::client::rejected;
use crate::config::SyncConfig;
use crate::error::{SyncError, SyncResult};
use crate::wire::{ApiResponse, ReorderRequest};

/// Server acknowledgement of a saved order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Confirmation {
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OrderGateway {
    client: Client,
    config: SyncConfig,
}

impl OrderGateway {
    pub fn new(config: &SyncConfig) -> Self {
        Self::with_client(config.build_http_client(), config.clone())
    }

    pub(crate) fn with_client(client: Client, config: SyncConfig) -> Self {
        Self { client, config }
    }

    /// PATCH `{ "orderedIds": [...] }` to `patch_url`.
    ///
    /// The role gate runs first; when it fails no request is sent. Non-2xx,
    /// `success: false` and unreadable bodies are all failures.
    pub async fn save(
        &self,
        patch_url: &str,
        auth: &AuthorizationContext,
        ordered_ids: &[String],
        required_role: &str,
    ) -> SyncResult<Confirmation> {
        auth.authorize(required_role)?;
        let headers = auth.headers(&self.config.role_header)?;

        let body = ReorderRequest {
            ordered_ids: ordered_ids.to_vec(),
        };
        log::debug!("PATCH {} with {} ids", patch_url, body.ordered_ids.len());

        let response = self
            .client
            .patch(patch_url)
            .headers(headers)
            .header(CACHE_CONTROL, "no-cache")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            let err = rejected(status, &text);
            log::error!("Saving order to {} failed: {}", patch_url, err);
            return Err(err);
        }

        let parsed: ApiResponse<Value> = serde_json::from_str(&text)
            .map_err(|e| SyncError::InvalidResponse(format!("body is not JSON: {}", e)))?;
        if !parsed.success {
            let message = parsed
                .message
                .unwrap_or_else(|| "Server reported failure".to_string());
            log::error!("Saving order to {} rejected: {}", patch_url, message);
            return Err(SyncError::Rejected { status: None, message });
        }

        Ok(Confirmation {
            message: parsed.message,
        })
    }
}
