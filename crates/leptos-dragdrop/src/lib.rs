//! Leptos DragDrop Utilities
//!
//! Mouse-event drag-and-drop for flat, index-addressed lists.
//! Uses a movement threshold to distinguish click from drag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// How a drag gesture ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragRelease {
    /// Released over the row at `target`
    Dropped { source: usize, target: usize },
    /// Released outside any row
    Cancelled { source: usize },
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_index_read: ReadSignal<Option<usize>>,
    pub dragging_index_write: WriteSignal<Option<usize>>,
    pub drop_target_read: ReadSignal<Option<usize>>,
    pub drop_target_write: WriteSignal<Option<usize>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending row index (mousedown but not yet dragging)
    pub pending_index_read: ReadSignal<Option<usize>>,
    pub pending_index_write: WriteSignal<Option<usize>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// Whether a pointer moved far enough from its start to count as a drag
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

/// Classify a mouseup given the active drag and hovered row
pub fn classify_release(dragging: Option<usize>, target: Option<usize>) -> Option<DragRelease> {
    match (dragging, target) {
        (Some(source), Some(target)) => Some(DragRelease::Dropped { source, target }),
        (Some(source), None) => Some(DragRelease::Cancelled { source }),
        (None, _) => None,
    }
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_index_read, dragging_index_write) = signal(None::<usize>);
    let (drop_target_read, drop_target_write) = signal(None::<usize>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_index_read, pending_index_write) = signal(None::<usize>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_index_read,
        dragging_index_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_index_read,
        pending_index_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    // Document listeners outlive the list that created the signals
    if dnd.dragging_index_write.try_set(None).is_some() {
        return;
    }
    dnd.drop_target_write.try_set(None);
    dnd.pending_index_write.try_set(None);
    dnd.drag_just_ended_write.try_set(true);

    // Swallow the click that follows the mouseup
    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.try_set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for a draggable row.
/// Records a pending drag with its start position.
pub fn make_on_mousedown(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore presses on inputs and buttons inside the row
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            dnd.pending_index_write.set(Some(index));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Document mousemove handler - starts the drag once moved past the threshold
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let Some(pending) = dnd.pending_index_read.try_get_untracked() else { return };
        if pending.is_some() && dnd.dragging_index_read.get_untracked().is_none() {
            let start = (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked());
            if exceeds_threshold(start, (ev.client_x(), ev.client_y())) {
                dnd.dragging_index_write.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for rows (the row becomes the destination)
pub fn make_on_item_mouseenter(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_index_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(index));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_index_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind the document mouseup handler. `on_release` fires only when a drag
/// was actually in progress; plain clicks pass through untouched.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_release: F)
where
    F: Fn(DragRelease) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let Some(dragging) = dnd.dragging_index_read.try_get_untracked() else { return };
        let release = classify_release(dragging, dnd.drop_target_read.get_untracked());
        end_drag(&dnd);
        if let Some(release) = release {
            on_release(release);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold() {
        assert!(!exceeds_threshold((10, 10), (13, 14)));
        assert!(exceeds_threshold((10, 10), (16, 10)));
        assert!(exceeds_threshold((10, 10), (10, 3)));
    }

    #[test]
    fn test_classify_release() {
        assert_eq!(
            classify_release(Some(0), Some(2)),
            Some(DragRelease::Dropped { source: 0, target: 2 })
        );
        assert_eq!(classify_release(Some(1), None), Some(DragRelease::Cancelled { source: 1 }));
        assert_eq!(classify_release(None, Some(3)), None);
    }
}
