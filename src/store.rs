//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use order_sync::{AuthorizationContext, Notice};
use reactive_stores::Store;

use crate::collections::Screen;

/// Toast with a stable id so it can be dismissed individually
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notice,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Screen currently shown
    pub active_screen: Screen,
    /// Session read at startup
    pub auth: AuthorizationContext,
    /// Visible toasts, oldest first
    pub toasts: Vec<Toast>,
    /// Next toast id
    pub next_toast_id: u32,
}

impl AppState {
    pub fn new(auth: AuthorizationContext) -> Self {
        Self {
            auth,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_active_screen(store: &AppStore) -> Screen {
    store.active_screen().get()
}

pub fn store_set_screen(store: &AppStore, screen: Screen) {
    store.active_screen().set(screen);
}

pub fn store_auth(store: &AppStore) -> AuthorizationContext {
    store.auth().get_untracked()
}

pub fn store_toasts(store: &AppStore) -> Vec<Toast> {
    store.toasts().get()
}

/// Append a toast and return its id
pub fn store_push_notice(store: &AppStore, notice: Notice) -> u32 {
    let id = store.next_toast_id().get_untracked();
    store.next_toast_id().set(id.wrapping_add(1));
    store.toasts().write().push(Toast { id, notice });
    id
}

/// Remove a toast by id; a no-op once the store is gone
pub fn store_dismiss_toast(store: &AppStore, id: u32) {
    if let Some(mut toasts) = store.toasts().try_write() {
        toasts.retain(|toast| toast.id != id);
    }
}
