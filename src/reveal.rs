//! One-shot entrance animation for category cards.
//!
//! A style block injected at init defines the hidden (`reveal-ready`) and
//! visible (`reveal`) states with a 1s eased transition. Categories start
//! hidden and transition exactly once, when they first intersect the
//! viewport; the observer drops each element after revealing it, so the
//! transition is monotonic for the page's lifetime. Without
//! `IntersectionObserver` support everything is revealed immediately.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use crate::dom;

/// Intersection ratio at which a category counts as visible.
pub const OBSERVE_THRESHOLD: f64 = 0.1;

/// Pulls the trigger line 100px up from the viewport bottom.
pub const ROOT_MARGIN: &str = "0px 0px -100px 0px";

pub const READY_CLASS: &str = "reveal-ready";
pub const REVEALED_CLASS: &str = "reveal";

/// Injected once into `<head>`; the page stylesheet knows nothing about
/// reveal states.
pub const REVEAL_CSS: &str = "
    .reveal-ready {
        opacity: 0;
        transform: translateY(30px);
        transition: opacity 1s ease, transform 1s ease;
    }

    .reveal {
        opacity: 1;
        transform: translateY(0);
    }
";

/// How categories get revealed, decided once at init from runtime
/// capability.
#[derive(Debug, PartialEq, Eq)]
pub enum RevealStrategy {
    /// Reveal each element when it first enters the viewport.
    Observed,
    /// No observer support: reveal everything up front, skipping animation.
    Immediate,
}

pub fn strategy(observer_available: bool) -> RevealStrategy {
    if observer_available {
        RevealStrategy::Observed
    } else {
        RevealStrategy::Immediate
    }
}

/// One-shot watch set: [`reveal`](OneShot::reveal) returns true exactly
/// once per item, the first time it reports intersecting, and drops the
/// item from the set. A revealed item can never go back to pending, so
/// the ready-to-revealed transition is monotonic.
pub struct OneShot<T: PartialEq> {
    pending: Vec<T>,
}

impl<T: PartialEq> OneShot<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { pending: items }
    }

    /// Marks `item` revealed if it is still pending and intersecting.
    pub fn reveal(&mut self, item: &T, intersecting: bool) -> bool {
        if !intersecting {
            return false;
        }
        match self.pending.iter().position(|pending| pending == item) {
            Some(idx) => {
                self.pending.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

pub fn init(window: &Window, document: &Document) -> Result<(), JsValue> {
    inject_styles(document)?;

    let categories = dom::query_all(document, ".category");
    tracing::debug!(count = categories.len(), "wiring reveal animations");

    let observer_available =
        js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false);

    match strategy(observer_available) {
        RevealStrategy::Observed => {
            let observer = build_observer(categories.clone())?;
            for category in &categories {
                let _ = category.class_list().add_1(READY_CLASS);
                observer.observe(category);
            }
        }
        RevealStrategy::Immediate => {
            tracing::debug!("IntersectionObserver unavailable, revealing immediately");
            for category in &categories {
                let _ = category.class_list().add_1(READY_CLASS);
                let _ = category.class_list().add_1(REVEALED_CLASS);
            }
        }
    }
    Ok(())
}

fn inject_styles(document: &Document) -> Result<(), JsValue> {
    let style = document.create_element("style")?;
    style.set_text_content(Some(REVEAL_CSS));
    if let Some(head) = document.head() {
        head.append_child(&style)?;
    }
    Ok(())
}

fn build_observer(watched: Vec<web_sys::Element>) -> Result<IntersectionObserver, JsValue> {
    let mut watched = OneShot::new(watched);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                if watched.reveal(&target, entry.is_intersecting()) {
                    let _ = target.class_list().add_1(REVEALED_CLASS);
                    // One-shot: once revealed, stop watching this element.
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(OBSERVE_THRESHOLD));
    options.set_root_margin(ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();
    Ok(observer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_prefers_observation() {
        assert_eq!(strategy(true), RevealStrategy::Observed);
    }

    #[test]
    fn test_strategy_degrades_without_observer() {
        assert_eq!(strategy(false), RevealStrategy::Immediate);
    }

    #[test]
    fn test_reveal_is_one_shot_per_element() {
        let mut watched = OneShot::new(vec!["a", "b"]);

        assert!(watched.reveal(&"a", true));
        // Later intersection reports for the same element are no-ops.
        assert!(!watched.reveal(&"a", true));
        assert!(!watched.reveal(&"a", false));
        assert_eq!(watched.pending(), 1);
    }

    #[test]
    fn test_non_intersecting_entries_stay_pending() {
        let mut watched = OneShot::new(vec!["a"]);

        assert!(!watched.reveal(&"a", false));
        assert_eq!(watched.pending(), 1);
        assert!(watched.reveal(&"a", true));
    }

    #[test]
    fn test_entry_order_does_not_affect_final_state() {
        let categories = vec!["a", "b", "c", "d"];
        let orders = [["a", "b", "c", "d"], ["d", "c", "b", "a"], ["c", "a", "d", "b"]];

        for order in &orders {
            let mut watched = OneShot::new(categories.clone());
            for category in order {
                assert!(watched.reveal(category, true), "first intersection reveals");
            }
            assert_eq!(watched.pending(), 0, "all revealed and unwatched");
        }
    }

    #[test]
    fn test_unknown_elements_are_ignored() {
        let mut watched = OneShot::new(vec!["a"]);
        assert!(!watched.reveal(&"z", true));
        assert_eq!(watched.pending(), 1);
    }

    #[test]
    fn test_reveal_css_defines_both_states() {
        assert!(REVEAL_CSS.contains(".reveal-ready"));
        assert!(REVEAL_CSS.contains(".reveal {"));
        assert!(REVEAL_CSS.contains("translateY(30px)"));
        assert!(REVEAL_CSS.contains("transition: opacity 1s ease, transform 1s ease"));
    }
}
