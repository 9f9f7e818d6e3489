//! Browser Session
//!
//! The login flow stores the access token and role in `localStorage`. They
//! are read once at startup and handed to the panels explicitly.

use order_sync::AuthorizationContext;

const TOKEN_KEY: &str = "accessToken";
const ROLE_KEY: &str = "role";

fn read_key(storage: &web_sys::Storage, key: &str) -> Option<String> {
    storage
        .get_item(key)
        .ok()
        .flatten()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn read_session() -> AuthorizationContext {
    let storage = match web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        Some(storage) => storage,
        None => {
            web_sys::console::warn_1(&"[SESSION] localStorage unavailable".into());
            return AuthorizationContext::anonymous();
        }
    };

    let auth = AuthorizationContext {
        token: read_key(&storage, TOKEN_KEY),
        role: read_key(&storage, ROLE_KEY),
    };
    web_sys::console::log_1(
        &format!(
            "[SESSION] token={} role={}",
            if auth.token.is_some() { "present" } else { "missing" },
            auth.role.as_deref().unwrap_or("-")
        )
        .into(),
    );
    auth
}
