#![recursion_limit = "256"]

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod contact;
pub mod content;
pub mod i18n;
pub mod keys;
pub mod navigation;
pub mod scroll;
pub mod sections;
#[cfg(feature = "ssr")]
pub mod server;
pub mod timeline;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // a second init (hot reload) only fails to install the logger again
    let _ = console_log::init_with_level(level);
    leptos::mount::hydrate_body(App);
}
