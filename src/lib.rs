pub mod analyzer;
pub mod app;
pub mod components;
pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod pages;
pub mod toast;
pub mod utils;

#[cfg(feature = "ssr")]
pub mod api;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;

    utils::panic_hook::init();
    leptos::mount_to_body(App);
}
