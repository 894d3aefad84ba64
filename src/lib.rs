//! # theme-toggle
//!
//! Light/dark theme toggle for a server-rendered page, compiled to WASM.
//! On load it applies the visitor's persisted preference (the `theme` key
//! in `localStorage`); each click on the `#toggle-theme` control flips the
//! `dark-mode` class on `<body>`, relabels the control, and persists the
//! choice.
//!
//! The decision logic ([`theme`], [`controller`]) is pure and tested
//! natively; the browser bindings ([`dom`]) are a thin shim behind the
//! `web` feature.

pub mod controller;
pub mod prefs;
pub mod theme;

#[cfg(feature = "web")]
pub mod dom;

/// WASM entry point: set up logging, then mount once the document's
/// structural content is ready.
#[cfg(feature = "web")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() == "loading" {
        use wasm_bindgen::JsCast;
        let on_ready = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(dom::mount);
        let _ = document.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.as_ref().unchecked_ref(),
        );
        on_ready.forget();
    } else {
        dom::mount();
    }
}
