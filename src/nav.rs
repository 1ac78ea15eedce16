//! Scroll-position navigation highlighting.
//!
//! On every scroll event the current section is recomputed from scratch:
//! the last `section[id]` whose top offset sits within [`SECTION_PROBE`] px
//! below the scroll position wins. The `active` class is then cleared from
//! every nav link and reassigned, so the highlight can never drift out of
//! sync with the scroll position.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

use crate::dom;

/// How far below the scroll position a section top may sit and still count
/// as current. Covers the fixed header plus some breathing room.
pub const SECTION_PROBE: f64 = 200.0;

const ACTIVE_CLASS: &str = "active";

/// Identifier of the current section: the last entry whose top offset is at
/// or below `scroll_y + SECTION_PROBE`. `None` when no section qualifies.
pub fn current_section(sections: &[(String, f64)], scroll_y: f64) -> Option<&str> {
    let mut current = None;
    for (id, top) in sections {
        if *top <= scroll_y + SECTION_PROBE {
            current = Some(id.as_str());
        }
    }
    current
}

/// Href a nav link must carry to receive the highlight. `None` when no
/// section qualifies, so a bare `href="#"` link is never highlighted.
pub fn active_href(current: Option<&str>) -> Option<String> {
    current.map(|id| format!("#{id}"))
}

pub fn init(window: &Window, document: &Document) -> Result<(), JsValue> {
    tracing::debug!("wiring nav highlighting");

    let w = window.clone();
    let d = document.clone();
    dom::on_event(window, "scroll", move |_| highlight(&w, &d))
}

fn highlight(window: &Window, document: &Document) {
    let sections: Vec<(String, f64)> = dom::query_all(document, "section[id]")
        .iter()
        .filter_map(|section| {
            let top = section.dyn_ref::<HtmlElement>()?.offset_top() as f64;
            Some((section.id(), top))
        })
        .collect();

    let current = active_href(current_section(&sections, dom::scroll_y(window)));

    for link in dom::query_all(document, ".nav-links a") {
        let class_list = link.class_list();
        let _ = class_list.remove_1(ACTIVE_CLASS);
        if let (Some(href), Some(current)) = (link.get_attribute("href"), current.as_deref()) {
            if href == current {
                let _ = class_list.add_1(ACTIVE_CLASS);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(specs: &[(&str, f64)]) -> Vec<(String, f64)> {
        specs.iter().map(|(id, top)| (id.to_string(), *top)).collect()
    }

    #[test]
    fn test_section_becomes_current_within_probe() {
        // #about starts at 600; 401 + 200 = 601 >= 600
        let s = sections(&[("about", 600.0)]);
        assert_eq!(current_section(&s, 401.0), Some("about"));
    }

    #[test]
    fn test_no_section_before_probe_reaches_it() {
        // 300 + 200 = 500 < 600
        let s = sections(&[("about", 600.0)]);
        assert_eq!(current_section(&s, 300.0), None);
    }

    #[test]
    fn test_probe_boundary_is_inclusive() {
        let s = sections(&[("about", 600.0)]);
        assert_eq!(current_section(&s, 400.0), Some("about"));
    }

    #[test]
    fn test_last_qualifying_section_wins() {
        let s = sections(&[("hero", 0.0), ("features", 800.0), ("pricing", 1600.0)]);
        assert_eq!(current_section(&s, 100.0), Some("hero"));
        assert_eq!(current_section(&s, 700.0), Some("features"));
        assert_eq!(current_section(&s, 1500.0), Some("pricing"));
    }

    #[test]
    fn test_empty_page_has_no_current_section() {
        assert_eq!(current_section(&[], 5000.0), None);
    }

    #[test]
    fn test_active_href_targets_current_section() {
        assert_eq!(active_href(Some("about")).as_deref(), Some("#about"));
    }

    #[test]
    fn test_bare_hash_link_never_highlighted_without_current_section() {
        // No qualifying section clears every highlight; in particular a
        // link with href="#" must not match.
        assert_eq!(active_href(None), None);
        assert_ne!(active_href(Some("about")).as_deref(), Some("#"));
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let s = sections(&[("hero", 0.0), ("about", 600.0)]);
        let first = current_section(&s, 450.0);
        let second = current_section(&s, 450.0);
        assert_eq!(first, second);
    }
}
