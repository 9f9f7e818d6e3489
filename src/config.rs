//! Frontend configuration

pub const DEFAULT_API_BASE: &str = "http://localhost:3000";

/// API base URL, fixed at build time through `REARRANGE_API_BASE`
pub fn api_base() -> &'static str {
    option_env!("REARRANGE_API_BASE")
        .map(|base| base.trim_end_matches('/'))
        .filter(|base| !base.is_empty())
        .unwrap_or(DEFAULT_API_BASE)
}
