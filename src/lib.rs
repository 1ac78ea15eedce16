//! landing-fx - page enhancements for the landing page
//!
//! Five independent behaviors wired onto fixed selectors, each a direct
//! reaction to a DOM event:
//! - `anchors` - offset-aware smooth scrolling for in-page links
//! - `parallax` - layered background transforms driven by scroll offset
//! - `nav` - highlights the nav link for the section currently in view
//! - `reveal` - one-shot entrance animation when categories scroll in
//! - `buttons` - exclusive active state across the button group, with
//!   touch and keyboard support
//!
//! Every handler recomputes from live DOM state; nothing is cached between
//! events, so repeated events at the same scroll position are idempotent.
//! Missing elements mean "feature not applicable here", never an error.

pub mod anchors;
pub mod buttons;
pub mod dom;
pub mod nav;
pub mod parallax;
pub mod polyfill;
pub mod reveal;

use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    run_when_ready()
}

/// Defers wiring until the document's structural content exists. When the
/// module loads after parsing finished (`readyState` past "loading") the
/// initializers run immediately.
pub fn run_when_ready() -> Result<(), JsValue> {
    let Some(document) = dom::document() else {
        return Ok(());
    };

    if document.ready_state() == "loading" {
        dom::on_event(&document, "DOMContentLoaded", move |_| {
            if let Err(err) = init_page() {
                tracing::error!(?err, "page enhancement wiring failed");
            }
        })?;
    } else {
        init_page()?;
    }
    Ok(())
}

fn init_page() -> Result<(), JsValue> {
    let Some(window) = dom::window() else {
        return Ok(());
    };
    let Some(document) = window.document() else {
        return Ok(());
    };

    tracing::info!("DOM ready, wiring page enhancements");

    polyfill::init(&window, &document)?;
    anchors::init(&window, &document)?;
    parallax::init(&window, &document)?;
    nav::init(&window, &document)?;
    reveal::init(&window, &document)?;
    buttons::init(&document)?;

    Ok(())
}
