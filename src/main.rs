mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use app::App;
use config::{LOG_LEVEL, MOUNT_ELEMENT_ID};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(LOG_LEVEL);

    let Some(root) = document().get_element_by_id(MOUNT_ELEMENT_ID) else {
        log::error!("no #{} element to mount into", MOUNT_ELEMENT_ID);
        return;
    };

    mount_to(root.unchecked_into::<web_sys::HtmlElement>(), App).forget();
}
