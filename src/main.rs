//! Shop Admin Frontend Entry Point

mod app;
mod browser;
mod components;
mod context;
mod list_model;
mod store;
mod views;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init_logger("ShopAdmin", log::LevelFilter::Debug) {
        web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(&e));
    }
    mount_to_body(App);
}
