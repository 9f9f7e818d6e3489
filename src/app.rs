//! Rearrange Admin App
//!
//! Tab bar on top, the active rearrange screen below, toasts in the corner.

use leptos::prelude::*;
use order_sync::{OrderStoreClient, SyncConfig};

use crate::collections::{self, Screen};
use crate::components::{ReorderPanel, ScreenTabs, Toasts};
use crate::config::api_base;
use crate::session::read_session;
use crate::store::{store_active_screen, store_auth, AppState, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = reactive_stores::Store::new(AppState::new(read_session()));
    provide_context(store);

    let client = StoredValue::new_local(OrderStoreClient::new(&SyncConfig::new()));
    let base = api_base();

    // Each screen gets its own panel; switching screens reloads from the server
    let active_panel = move || {
        let auth = store_auth(&store);
        let client = client.get_value();
        let screen = store_active_screen(&store);
        match screen {
            Screen::SimTypes => view! {
                <ReorderPanel title=screen.title() source=collections::sim_types(base) auth=auth client=client />
            }.into_any(),
            Screen::StorageTypes => view! {
                <ReorderPanel title=screen.title() source=collections::storage_types(base) auth=auth client=client />
            }.into_any(),
            Screen::Units => view! {
                <ReorderPanel title=screen.title() source=collections::units(base) auth=auth client=client />
            }.into_any(),
            Screen::VendorCategories => view! {
                <ReorderPanel title=screen.title() source=collections::vendor_categories(base) auth=auth client=client />
            }.into_any(),
            Screen::FooterWidgets => view! {
                <ReorderPanel title=screen.title() source=collections::footer_widgets(base) auth=auth client=client />
            }.into_any(),
        }
    };

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Rearrange"</h1>
                <ScreenTabs />
            </header>
            <main class="main-content">
                {active_panel}
            </main>
            <Toasts />
        </div>
    }
}
