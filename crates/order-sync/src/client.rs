//! Order Store Client
//!
//! Reads a collection endpoint and normalizes its records into an
//! [`OrderedCollection`].

use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::auth::AuthorizationContext;
use crate::config::SyncConfig;
use crate::error::{SyncError, SyncResult};
use crate::gateway::OrderGateway;
use crate::model::OrderedCollection;
use crate::source::CollectionSource;
use crate::wire::ApiResponse;

/// Outcome of [`OrderStoreClient::load`]. Failures never escape `load`; they
/// come back as an empty collection plus the error.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub collection: OrderedCollection,
    pub error: Option<SyncError>,
}

impl LoadReport {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct OrderStoreClient {
    client: Client,
    config: SyncConfig,
}

impl OrderStoreClient {
    pub fn new(config: &SyncConfig) -> Self {
        Self {
            client: config.build_http_client(),
            config: config.clone(),
        }
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Persistence gateway sharing this client's connection pool
    pub fn gateway(&self) -> OrderGateway {
        OrderGateway::with_client(self.client.clone(), self.config.clone())
    }

    /// Load a collection, converting any failure into an empty collection
    /// plus the error. Calling it again replaces, never merges.
    pub async fn load<R: DeserializeOwned>(
        &self,
        source: &CollectionSource<R>,
        auth: &AuthorizationContext,
    ) -> LoadReport {
        match self.fetch_records(source, auth).await {
            Ok(collection) => LoadReport { collection, error: None },
            Err(e) => {
                log::error!("Failed to load {}: {}", source.name, e);
                LoadReport {
                    collection: OrderedCollection::new(),
                    error: Some(e),
                }
            }
        }
    }

    /// One uncached GET of `fetch_url`, then normalization
    pub async fn fetch_records<R: DeserializeOwned>(
        &self,
        source: &CollectionSource<R>,
        auth: &AuthorizationContext,
    ) -> SyncResult<OrderedCollection> {
        let headers = auth.headers(&self.config.role_header)?;
        log::debug!("GET {} ({})", source.fetch_url, source.name);

        let response = self
            .client
            .get(&source.fetch_url)
            .headers(headers)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(rejected(status, &body));
        }

        let records = parse_records(&body)?;
        Ok(normalize(records, source))
    }
}

/// Map, drop skipped records, then apply the optional sort. Records that do
/// not deserialize into `R` are skipped just like a `None` from the mapper.
pub fn normalize<R: DeserializeOwned>(records: Vec<Value>, source: &CollectionSource<R>) -> OrderedCollection {
    let total = records.len();
    let items = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, raw)| match serde_json::from_value::<R>(raw) {
            Ok(record) => (source.map_item)(record),
            Err(e) => {
                log::warn!("{}: skipping malformed record #{}: {}", source.name, index, e);
                None
            }
        });

    let mut collection = OrderedCollection::from_items(items);
    if let Some(compare) = source.sort {
        collection.sort_by(compare);
    }
    log::debug!("{}: kept {} of {} records", source.name, collection.len(), total);
    collection
}

/// Pull the `data` array out of a read response. A missing or null `data`
/// is an empty collection.
fn parse_records(body: &str) -> SyncResult<Vec<Value>> {
    let mut value: Value = serde_json::from_str(body)
        .map_err(|e| SyncError::InvalidResponse(format!("body is not JSON: {}", e)))?;
    let object = value
        .as_object_mut()
        .ok_or_else(|| SyncError::InvalidResponse("expected a JSON object".to_string()))?;

    if let Some(Value::Bool(false)) = object.get("success") {
        let message = object
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Server reported failure")
            .to_string();
        return Err(SyncError::Rejected { status: None, message });
    }

    match object.remove("data") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(records)) => Ok(records),
        Some(_) => Err(SyncError::InvalidResponse("`data` is not an array".to_string())),
    }
}

/// Error for a non-2xx response, preferring the server's own message
pub(crate) fn rejected(status: StatusCode, body: &str) -> SyncError {
    let message = serde_json::from_str::<ApiResponse<Value>>(body)
        .ok()
        .and_then(|resp| resp.message)
        .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
    SyncError::Rejected {
        status: Some(status.as_u16()),
        message,
    }
}
