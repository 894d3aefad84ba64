//! Browser shim: DOM lookups, class/label mutation, event binding.
//!
//! Everything here needs a real browser and is gated behind the `web`
//! feature. The shim carries no logic of its own; it feeds DOM reads into
//! the [`ThemeController`] and applies the [`UiUpdate`]s it hands back.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::controller::{ThemeController, UiUpdate};
use crate::prefs::PreferenceStore;

/// Id of the toggle control the host page must provide.
const TOGGLE_ID: &str = "toggle-theme";

/// Class applied to `<body>` while dark mode is active. Styled by the host
/// page's CSS.
const DARK_CLASS: &str = "dark-mode";

/// `localStorage`-backed preference store.
///
/// Storage can be denied by browser policy; reads then report "nothing
/// stored" and writes are dropped.
pub struct LocalStore;

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
    }
}

/// Write a controller-provided update to the page.
fn apply(button: &web_sys::HtmlElement, body: &web_sys::HtmlElement, update: UiUpdate) {
    let _ = body.class_list().toggle_with_force(DARK_CLASS, update.dark);
    button.set_text_content(Some(update.label));
}

/// Wire the toggle control up: apply any persisted preference, then bind
/// the click handler for the lifetime of the page.
pub fn mount() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Some(button) = document
        .get_element_by_id(TOGGLE_ID)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        log::error!("toggle control #{TOGGLE_ID} not found; theme toggle disabled");
        return;
    };

    let mut controller = ThemeController::new(LocalStore);
    if let Some(update) = controller.load() {
        apply(&button, &body, update);
    }

    let controller = Rc::new(RefCell::new(controller));
    let handler = {
        let button = button.clone();
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_event| {
            let update = controller.borrow_mut().toggle();
            apply(&button, &body, update);
        })
    };
    let _ = button.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref());

    // The control lives as long as the page; leak the closure so the
    // listener stays valid.
    handler.forget();
}
