//! Layered background parallax.
//!
//! Each background layer carries a fixed depth translation, scale factor
//! and scroll coefficient; its transform is a pure function of the current
//! scroll offset. The scroll handler fires at native event rate and
//! recomputes every present layer from scratch. Resize triggers the same
//! recomputation only - it never registers a second scroll listener.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

use crate::dom;

/// A background layer and its fixed transform parameters.
pub struct Layer {
    pub selector: &'static str,
    pub depth_px: i32,
    pub scale: f64,
    pub coefficient: f64,
}

/// Back-to-front layer stack. Layers absent from the DOM are skipped.
pub const LAYERS: [Layer; 4] = [
    Layer {
        selector: ".stars",
        depth_px: -10,
        scale: 2.0,
        coefficient: 0.1,
    },
    Layer {
        selector: ".middle-layer",
        depth_px: -5,
        scale: 1.5,
        coefficient: 0.05,
    },
    Layer {
        selector: ".grid-layer",
        depth_px: -3,
        scale: 1.3,
        coefficient: 0.03,
    },
    Layer {
        selector: ".digital-rain",
        depth_px: -2,
        scale: 1.2,
        coefficient: 0.02,
    },
];

/// CSS transform for one layer at a given scroll offset.
pub fn transform_for(layer: &Layer, scroll_y: f64) -> String {
    format!(
        "translateZ({}px) scale({}) translateY({}px)",
        layer.depth_px,
        layer.scale,
        scroll_y * layer.coefficient
    )
}

pub fn init(window: &Window, document: &Document) -> Result<(), JsValue> {
    tracing::debug!("wiring parallax layers");

    let w = window.clone();
    let d = document.clone();
    dom::on_event(window, "scroll", move |_| apply(&w, &d))?;

    // Recompute on resize; the listener set stays as registered above.
    let w = window.clone();
    let d = document.clone();
    dom::on_event(window, "resize", move |_| apply(&w, &d))?;

    Ok(())
}

fn apply(window: &Window, document: &Document) {
    let scroll_y = dom::scroll_y(window);

    for layer in &LAYERS {
        let Some(element) = document.query_selector(layer.selector).ok().flatten() else {
            continue;
        };
        if let Some(element) = element.dyn_ref::<HtmlElement>() {
            let _ = element
                .style()
                .set_property("transform", &transform_for(layer, scroll_y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_coefficients() {
        let coefficients: Vec<f64> = LAYERS.iter().map(|l| l.coefficient).collect();
        assert_eq!(coefficients, vec![0.1, 0.05, 0.03, 0.02]);
    }

    #[test]
    fn test_transform_at_rest() {
        assert_eq!(
            transform_for(&LAYERS[0], 0.0),
            "translateZ(-10px) scale(2) translateY(0px)"
        );
        assert_eq!(
            transform_for(&LAYERS[1], 0.0),
            "translateZ(-5px) scale(1.5) translateY(0px)"
        );
    }

    #[test]
    fn test_transform_tracks_scroll_offset() {
        let layer = &LAYERS[3];
        let moved = transform_for(layer, 500.0);
        assert_eq!(moved, "translateZ(-2px) scale(1.2) translateY(10px)");
    }

    #[test]
    fn test_transform_is_pure() {
        for layer in &LAYERS {
            assert_eq!(transform_for(layer, 321.0), transform_for(layer, 321.0));
        }
    }
}
