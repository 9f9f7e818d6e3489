//! Rearrange Admin Frontend Entry Point

mod app;
mod collections;
mod components;
mod config;
mod session;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
