//! Button group interaction handling.
//!
//! At most one `.btn` carries `btn-active` at any time; every activation
//! re-queries the group and reassigns the flag from scratch. Keyboard
//! activation (Enter/Space) funnels into the same click path, and a
//! page-wide passive touchstart listener keeps `:active` styling working on
//! touch platforms.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, KeyboardEvent};

use crate::dom;

pub const ACTIVE_CLASS: &str = "btn-active";

/// Keys that activate a focused button.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Reassigns a single-selection flag across `items`: `set` is called for
/// every item, true only for the one at `active_idx`.
pub fn apply_exclusive<T>(items: &[T], active_idx: usize, mut set: impl FnMut(&T, bool)) {
    for (i, item) in items.iter().enumerate() {
        set(item, i == active_idx);
    }
}

pub fn init(document: &Document) -> Result<(), JsValue> {
    let buttons = dom::query_all(document, ".btn");
    tracing::debug!(count = buttons.len(), "wiring button interactions");

    for button in &buttons {
        let d = document.clone();
        dom::on_event(button, "click", move |event| {
            let Some(button) = event.current_target().and_then(|t| t.dyn_into::<Element>().ok())
            else {
                return;
            };
            tracing::debug!("button clicked");
            activate(&d, &button);
        })?;

        // Observational only; preventing default here would break taps.
        dom::on_event(button, "touchstart", |_| {
            tracing::debug!("button touched");
        })?;

        dom::on_event(button, "keydown", move |event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if !is_activation_key(&key_event.key()) {
                return;
            }
            event.prevent_default();
            tracing::debug!("button activated by keyboard");
            if let Some(button) = event
                .current_target()
                .and_then(|t| t.dyn_into::<HtmlElement>().ok())
            {
                button.click();
            }
        })?;
    }

    // Empty passive handler; its presence alone enables active states on
    // touch devices.
    dom::on_event_passive(document, "touchstart", |_| {})
}

fn activate(document: &Document, clicked: &Element) {
    let buttons = dom::query_all(document, ".btn");
    let Some(idx) = buttons.iter().position(|b| b == clicked) else {
        return;
    };
    apply_exclusive(&buttons, idx, |button, active| {
        let class_list = button.class_list();
        if active {
            let _ = class_list.add_1(ACTIVE_CLASS);
        } else {
            let _ = class_list.remove_1(ACTIVE_CLASS);
        }
    });
}
