//! Portfolio Web App (Leptos + WASM)

mod api;
mod app;
mod components;
mod dom;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(violations) = portfolio_common::check_parity() {
        for v in violations {
            gloo::console::error!(format!("翻訳が未定義: {} / {}", v.locale, v.key.attr()));
        }
    }
    leptos::mount::mount_to_body(app::App);
}
