//! Toast Notifications
//!
//! Transient success / error messages in the corner of the screen.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use order_sync::{Notice, NoticeKind};

use crate::store::{store_dismiss_toast, store_push_notice, store_toasts, use_app_store, AppStore};

const SUCCESS_MS: u32 = 3_000;
const ERROR_MS: u32 = 6_000;

/// Show a notice and schedule its dismissal
pub fn notify(store: AppStore, notice: Notice) {
    let lifetime = if notice.is_error() { ERROR_MS } else { SUCCESS_MS };
    let id = store_push_notice(&store, notice);
    spawn_local(async move {
        TimeoutFuture::new(lifetime).await;
        store_dismiss_toast(&store, id);
    });
}

#[component]
pub fn Toasts() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toast-stack">
            <For
                each=move || store_toasts(&store)
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.notice.kind {
                        NoticeKind::Success => "toast toast-success",
                        NoticeKind::Error => "toast toast-error",
                    };
                    view! {
                        <div class=class on:click=move |_| store_dismiss_toast(&store, id)>
                            {toast.notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
