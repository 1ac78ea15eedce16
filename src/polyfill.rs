//! Smooth-scroll capability detection.
//!
//! Strategy is selected once at init: when the engine understands
//! `scroll-behavior` natively nothing happens; otherwise the smoothscroll
//! polyfill is fetched from its CDN and a global diagnostic flag is set
//! when it lands. A failed fetch stays unobserved - anchor clicks then fall
//! back to instant jumps, which is acceptable degradation.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlScriptElement, Window};

use crate::dom;

pub const POLYFILL_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/smoothscroll-polyfill/0.4.4/smoothscroll.min.js";

/// Set on `window` once the polyfill has loaded, for developer inspection.
pub const POLYFILL_FLAG: &str = "__forceSmoothScrollPolyfill__";

#[derive(Debug, PartialEq, Eq)]
pub enum ScrollStrategy {
    /// The engine animates `behavior: smooth` itself.
    Native,
    /// Scroll behavior is shimmed by the external polyfill.
    Polyfilled,
}

pub fn strategy(has_native_smooth_scroll: bool) -> ScrollStrategy {
    if has_native_smooth_scroll {
        ScrollStrategy::Native
    } else {
        ScrollStrategy::Polyfilled
    }
}

pub fn init(window: &Window, document: &Document) -> Result<(), JsValue> {
    let native = document
        .document_element()
        .map(|root| has_scroll_behavior(&root))
        .unwrap_or(false);

    match strategy(native) {
        ScrollStrategy::Native => {
            tracing::debug!("native smooth scroll available");
            Ok(())
        }
        ScrollStrategy::Polyfilled => load_polyfill(window, document),
    }
}

fn has_scroll_behavior(root: &Element) -> bool {
    root.dyn_ref::<HtmlElement>()
        .map(|el| {
            js_sys::Reflect::has(el.style().as_ref(), &JsValue::from_str("scrollBehavior"))
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

fn load_polyfill(window: &Window, document: &Document) -> Result<(), JsValue> {
    tracing::debug!(url = POLYFILL_URL, "loading smooth scroll polyfill");

    let script: HtmlScriptElement = document.create_element("script")?.unchecked_into();
    script.set_src(POLYFILL_URL);

    let w = window.clone();
    dom::on_event(&script, "load", move |_| {
        let _ = js_sys::Reflect::set(w.as_ref(), &JsValue::from_str(POLYFILL_FLAG), &JsValue::TRUE);
    })?;

    if let Some(head) = document.head() {
        head.append_child(&script)?;
    }
    Ok(())
}
