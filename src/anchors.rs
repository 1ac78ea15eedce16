//! Smooth scrolling for in-page anchor links.
//!
//! Every `a[href^="#"]` gets a click handler that suppresses native
//! navigation and smooth-scrolls the window to the target section, leaving
//! room for the fixed header. The hero call-to-action button additionally
//! receives the `btn-active` class after its scroll dispatches; the scroll
//! itself goes through the same generic path as every other anchor.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, ScrollBehavior, ScrollToOptions, Window};

use crate::dom;

/// Vertical clearance for the fixed header, in px.
pub const HEADER_CLEARANCE: f64 = 80.0;

const CTA_SELECTOR: &str = ".hero .btn";
const CTA_ACTIVE_CLASS: &str = "btn-active";

/// Destination scroll offset for a target whose bounding rect starts at
/// `rect_top` while the window sits at `scroll_y`. Pure function of its
/// inputs, so repeated clicks on the same link compute the same offset.
pub fn scroll_target(rect_top: f64, scroll_y: f64) -> f64 {
    rect_top + scroll_y - HEADER_CLEARANCE
}

/// Interprets an href as an in-page target selector. A bare `"#"` and
/// non-fragment hrefs carry no target.
pub fn fragment_selector(href: &str) -> Option<&str> {
    if href.starts_with('#') && href.len() > 1 {
        Some(href)
    } else {
        None
    }
}

pub fn init(window: &Window, document: &Document) -> Result<(), JsValue> {
    let anchors = dom::query_all(document, "a[href^=\"#\"]");
    tracing::debug!(count = anchors.len(), "wiring anchor links");

    for anchor in &anchors {
        let w = window.clone();
        let d = document.clone();
        dom::on_event(anchor, "click", move |event| {
            event.prevent_default();
            let Some(anchor) = event.current_target().and_then(|t| t.dyn_into::<Element>().ok())
            else {
                return;
            };
            let href = anchor.get_attribute("href").unwrap_or_default();
            tracing::debug!(%href, "anchor clicked");
            scroll_to_fragment(&w, &d, &href);
        })?;
    }

    init_cta_hook(document)
}

/// Smooth-scrolls the window to the element `href` points at. Returns
/// whether a scroll was dispatched; a missing target is a silent no-op.
fn scroll_to_fragment(window: &Window, document: &Document, href: &str) -> bool {
    let Some(target) = fragment_selector(href).and_then(|sel| resolve_target(document, sel))
    else {
        return false;
    };

    let rect_top = target.get_bounding_client_rect().top();
    let top = scroll_target(rect_top, dom::scroll_y(window));

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

fn resolve_target(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// Post-action hook for the primary call-to-action button: once the generic
/// anchor handler has dispatched the scroll, mark the button active. The
/// guard mirrors the scroll path so the class only appears when a scroll
/// actually happened.
fn init_cta_hook(document: &Document) -> Result<(), JsValue> {
    let Some(cta) = document.query_selector(CTA_SELECTOR).ok().flatten() else {
        return Ok(());
    };
    tracing::debug!("found main CTA button");

    let d = document.clone();
    dom::on_event(&cta, "click", move |event| {
        let Some(cta) = event.current_target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let href = cta.get_attribute("href").unwrap_or_default();
        let dispatched = fragment_selector(&href)
            .and_then(|sel| resolve_target(&d, sel))
            .is_some();
        if dispatched {
            tracing::debug!("main CTA activated");
            let _ = cta.class_list().add_1(CTA_ACTIVE_CLASS);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_target_from_page_top() {
        // #pricing at viewport position 1200, window not yet scrolled
        assert_eq!(scroll_target(1200.0, 0.0), 1120.0);
    }

    #[test]
    fn test_scroll_target_mid_page() {
        // target already scrolled past: rect top is negative
        assert_eq!(scroll_target(-300.0, 1000.0), 620.0);
    }

    #[test]
    fn test_scroll_target_idempotent() {
        let first = scroll_target(640.0, 240.0);
        let second = scroll_target(640.0, 240.0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_fragment_selector_accepts_fragments() {
        assert_eq!(fragment_selector("#pricing"), Some("#pricing"));
        assert_eq!(fragment_selector("#a"), Some("#a"));
    }

    #[test]
    fn test_fragment_selector_rejects_bare_hash() {
        assert_eq!(fragment_selector("#"), None);
    }

    #[test]
    fn test_fragment_selector_rejects_external_hrefs() {
        assert_eq!(fragment_selector("/about"), None);
        assert_eq!(fragment_selector("https://example.com"), None);
        assert_eq!(fragment_selector(""), None);
    }
}
