use leptos::prelude::*;

use crate::collections::Screen;
use crate::store::{store_active_screen, store_set_screen, use_app_store};

/// Tab bar switching between the rearrange screens
#[component]
pub fn ScreenTabs() -> impl IntoView {
    let store = use_app_store();

    view! {
        <nav class="screen-tabs">
            {Screen::ALL
                .into_iter()
                .map(|screen| {
                    let class = move || {
                        if store_active_screen(&store) == screen { "screen-tab active" } else { "screen-tab" }
                    };
                    view! {
                        <button class=class on:click=move |_| store_set_screen(&store, screen)>
                            {screen.title()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
