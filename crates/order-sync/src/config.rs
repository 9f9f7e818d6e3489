//! Client configuration

/// Default header carrying the operator's role hint
pub const DEFAULT_ROLE_HEADER: &str = "x-user-role";

/// Configuration shared by the store client and the persistence gateway
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Request timeout in seconds (native targets only; the browser's fetch
    /// default applies on wasm)
    pub timeout: u64,

    /// Header name used for the role hint
    pub role_header: String,
}

impl SyncConfig {
    pub fn new() -> Self {
        Self {
            timeout: 30,
            role_header: DEFAULT_ROLE_HEADER.to_string(),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the role hint header name
    pub fn with_role_header(mut self, name: impl Into<String>) -> Self {
        self.role_header = name.into();
        self
    }

    pub(crate) fn build_http_client(&self) -> reqwest::Client {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(self.timeout));
        builder.build().unwrap_or_else(|e| {
            log::warn!("Falling back to default HTTP client: {}", e);
            reqwest::Client::new()
        })
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self::new()
    }
}
