//! UI Components
//!
//! Reusable Leptos components.

mod reorder_panel;
mod screen_tabs;
mod toasts;

pub use reorder_panel::ReorderPanel;
pub use screen_tabs::ScreenTabs;
pub use toasts::{notify, Toasts};
