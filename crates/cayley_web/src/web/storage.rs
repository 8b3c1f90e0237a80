use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use cayley::theme::{ThemeChange, THEME_CHANGE_ACTIVE};
use cayley::{PreferenceStore, Theme};

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// `window.localStorage` as a preference store.
pub(super) struct LocalStore;

impl PreferenceStore for LocalStore {
    type Error = String;

    fn get(&self, key: &str) -> Option<String> {
        local_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        let storage = local_storage().ok_or("localStorage unavailable".to_string())?;
        storage
            .set_item(key, value)
            .map_err(|_| "set_item() threw".to_string())
    }
}

fn document_element() -> Option<web_sys::Element> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
}

pub(super) fn apply_theme_to_document(change: &ThemeChange) {
    let Some(el) = document_element() else {
        return;
    };

    if change.animate {
        restart_transition(&el);
    }

    let _ = el.set_attribute("data-theme", change.theme.as_attr());
    let classes = el.class_list();
    let _ = classes.add_1(change.theme.class_name());
    let _ = classes.remove_1(change.theme.toggle().class_name());
}

fn restart_transition(el: &web_sys::Element) {
    let classes = el.class_list();
    let _ = classes.remove_1(THEME_CHANGE_ACTIVE);
    // Reading layout forces a reflow so the animation starts over.
    if let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() {
        let _ = html.offset_width();
    }
    let _ = classes.add_1(THEME_CHANGE_ACTIVE);
}

/// Drop the transition class once the animation ends.
pub(super) fn clear_transition_on_animation_end() {
    let Some(el) = document_element() else {
        return;
    };
    let target = el.clone();
    let cb = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
        let _ = target.class_list().remove_1(THEME_CHANGE_ACTIVE);
    }) as Box<dyn FnMut(web_sys::Event)>);
    if el
        .add_event_listener_with_callback("animationend", cb.as_ref().unchecked_ref())
        .is_ok()
    {
        cb.forget();
    }
}

/// Call `f(key, new_value)` whenever another tab writes localStorage.
pub(super) fn on_storage_change(mut f: impl FnMut(Option<String>, Option<String>) + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let cb = Closure::wrap(Box::new(move |ev: web_sys::StorageEvent| {
        f(ev.key(), ev.new_value());
    }) as Box<dyn FnMut(web_sys::StorageEvent)>);
    if window
        .add_event_listener_with_callback("storage", cb.as_ref().unchecked_ref())
        .is_ok()
    {
        cb.forget();
    }
}

pub(super) fn theme_button_id(theme: Theme) -> String {
    format!("theme-{}-button", theme.as_attr())
}
