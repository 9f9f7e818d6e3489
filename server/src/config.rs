//! Server configuration
//!
//! Read from the environment (a `.env` file is loaded first when present).

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::auth::SessionRegistry;

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_DB: &str = "rearrange.db";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address (env: REARRANGE_BIND)
    pub bind: SocketAddr,
    /// SQLite file, or `:memory:` (env: REARRANGE_DB)
    pub db_path: PathBuf,
    /// Token -> role pairs (env: REARRANGE_TOKENS, `token:role,...`)
    pub sessions: SessionRegistry,
    /// Insert demo records into empty collections (env: REARRANGE_SEED)
    pub seed_demo: bool,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let bind = std::env::var("REARRANGE_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());
        let bind = bind
            .parse::<SocketAddr>()
            .map_err(|e| anyhow::anyhow!("invalid REARRANGE_BIND '{}': {}", bind, e))?;

        let db_path = std::env::var("REARRANGE_DB")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_DB.to_string())
            .into();

        let sessions = SessionRegistry::parse(&std::env::var("REARRANGE_TOKENS").unwrap_or_default());
        if sessions.is_empty() {
            tracing::warn!("REARRANGE_TOKENS is empty; every write will be rejected");
        }

        let seed_demo = std::env::var("REARRANGE_SEED")
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            bind,
            db_path,
            sessions,
            seed_demo,
        })
    }

    /// In-memory database on an ephemeral port
    pub fn ephemeral(sessions: SessionRegistry) -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 0)),
            db_path: PathBuf::from(":memory:"),
            sessions,
            seed_demo: false,
        }
    }
}
