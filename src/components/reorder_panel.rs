//! Reorder Panel Component
//!
//! One rearrange screen: loads the collection on mount, lets the user drag
//! rows into a new order locally and persists the whole order on save.
//! Uses leptos-dragdrop for the mouse gesture; the order itself lives in a
//! `ReorderSession`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use order_sync::{AuthorizationContext, CollectionSource, OrderStoreClient, ReorderSession};
use serde::de::DeserializeOwned;

use leptos_dragdrop::*;

use crate::components::notify;
use crate::store::{use_app_store, AppStore};

/// Move any notice the session produced into the toast stack
fn flush_notice(session: RwSignal<ReorderSession>, store: AppStore) {
    if let Some(Some(notice)) = session.try_update(|s| s.take_notice()) {
        notify(store, notice);
    }
}

#[component]
pub fn ReorderPanel<R>(
    title: &'static str,
    source: CollectionSource<R>,
    auth: AuthorizationContext,
    client: OrderStoreClient,
) -> impl IntoView
where
    R: DeserializeOwned + 'static,
{
    let session = RwSignal::new(ReorderSession::new());
    let source = StoredValue::new_local(source);
    let client = StoredValue::new_local(client);
    let auth = StoredValue::new(auth);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let store = use_app_store();

    // Load on mount and on every reload
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let source = source.get_value();
        let client = client.get_value();
        let auth = auth.get_value();
        web_sys::console::log_1(&format!("[PANEL] Loading {}, trigger={}", source.name, trigger).into());
        session.update(|s| s.begin_load());
        spawn_local(async move {
            let report = client.load(&source, &auth).await;
            web_sys::console::log_1(
                &format!("[PANEL] Loaded {} {} items", report.collection.len(), source.name).into(),
            );
            // The panel may have been unmounted while the request was out
            if session.try_update(|s| s.finish_load(report)).is_some() {
                flush_notice(session, store);
            }
        });
    });

    // DnD: a release carries both ends of the gesture
    let dnd = create_dnd_signals();
    bind_global_mouseup(dnd, move |release| {
        let _ = session.try_update(|s| match release {
            DragRelease::Dropped { source, target } => {
                s.begin_drag(source);
                s.drop_at(target);
            }
            DragRelease::Cancelled { .. } => s.cancel_drag(),
        });
    });

    let on_save = move |_| {
        let source = source.get_value();
        let auth = auth.get_value();
        let attempt = session.try_update(|s| s.begin_save(&source.required_role, &auth));
        match attempt {
            Some(Ok(ids)) => {
                let gateway = client.with_value(|c| c.gateway());
                web_sys::console::log_1(&format!("[PANEL] Saving {} ids for {}", ids.len(), source.name).into());
                spawn_local(async move {
                    let result = gateway
                        .save(&source.patch_url, &auth, &ids, &source.required_role)
                        .await;
                    if session.try_update(|s| s.finish_save(result)).is_some() {
                        flush_notice(session, store);
                    }
                });
            }
            Some(Err(e)) => {
                web_sys::console::warn_1(&format!("[PANEL] Save refused: {}", e).into());
                session.update(|s| s.record_failure(&e));
                flush_notice(session, store);
            }
            None => {}
        }
    };

    // Memos so a drag does not rebuild the whole list
    let is_loading = Memo::new(move |_| session.with(|s| s.is_loading()));
    let is_empty = Memo::new(move |_| session.with(|s| s.is_empty()));
    let load_error = Memo::new(move |_| session.with(|s| s.load_error().map(String::from)));
    let is_saving = move || session.with(|s| s.is_saving());
    let rows = move || {
        session.with(|s| s.items().iter().cloned().enumerate().collect::<Vec<_>>())
    };

    view! {
        <section class="reorder-panel">
            <header class="reorder-header">
                <h2>{title}</h2>
                <div class="reorder-actions">
                    <button
                        class="btn-secondary"
                        disabled=move || is_loading.get()
                        on:click=move |_| set_reload_trigger.update(|v| *v += 1)
                    >
                        "Reload"
                    </button>
                    <button
                        class="btn-primary"
                        disabled=move || !session.with(|s| s.can_save())
                        on:click=on_save
                    >
                        {move || if is_saving() { "Saving..." } else { "Save Order" }}
                    </button>
                </div>
            </header>

            {move || if is_loading.get() {
                view! { <div class="reorder-loading">"Loading..."</div> }.into_any()
            } else if let Some(error) = load_error.get() {
                view! {
                    <div class="reorder-error">
                        <p>"Could not load items: " {error}</p>
                        <button class="btn-secondary" on:click=move |_| set_reload_trigger.update(|v| *v += 1)>
                            "Try again"
                        </button>
                    </div>
                }.into_any()
            } else if is_empty.get() {
                view! { <div class="reorder-empty">"No items to arrange"</div> }.into_any()
            } else {
                view! {
                    <ol class="reorder-list">
                        <For
                            each=rows
                            key=|(index, item)| (*index, item.id.clone())
                            children=move |(index, item)| {
                                let on_mousedown = make_on_mousedown(dnd, index);
                                let on_mouseenter = make_on_item_mouseenter(dnd, index);
                                let on_mouseleave = make_on_mouseleave(dnd);

                                let row_class = move || {
                                    let mut c = String::from("reorder-row");
                                    if dnd.dragging_index_read.get() == Some(index) { c.push_str(" dragging"); }
                                    if dnd.drop_target_read.get() == Some(index) { c.push_str(" drop-target"); }
                                    c
                                };

                                view! {
                                    <li
                                        class=row_class
                                        on:mousedown=on_mousedown
                                        on:mouseenter=on_mouseenter
                                        on:mouseleave=on_mouseleave
                                    >
                                        <span class="reorder-handle">"⠿"</span>
                                        <span class="reorder-rank">{index + 1}</span>
                                        <span class="reorder-label">{item.label.clone()}</span>
                                        {item.extra.clone().map(|extra| view! {
                                            <span class="reorder-badge">{extra}</span>
                                        })}
                                    </li>
                                }
                            }
                        />
                    </ol>
                }.into_any()
            }}
        </section>
    }
}
