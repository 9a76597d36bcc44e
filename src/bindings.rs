//! JS-facing handles. Each handle owns its observers and listeners;
//! calling `free()` from JS (or dropping it in Rust) releases them.

use crate::{dom, parallax, particles, reveal, scroll, style};
use reveal_core::{RevealMode, RevealOptions};
use wasm_bindgen::prelude::*;
use web_sys as web;

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// `{ elementRef, isVisible, scrollDirection }` for one element.
#[wasm_bindgen]
pub struct RevealHandle {
    binding: reveal::RevealBinding,
}

#[wasm_bindgen]
impl RevealHandle {
    /// `on_change(isVisible, scrollDirection)` runs after each change.
    /// `variant` is `"rise"` for header-style reveals, anything else for
    /// direction-aware reveals.
    #[wasm_bindgen(constructor)]
    pub fn new(
        threshold: Option<f64>,
        mode: Option<String>,
        variant: Option<String>,
        on_change: Option<js_sys::Function>,
    ) -> Result<RevealHandle, JsValue> {
        let hub = scroll::shared_hub().ok_or_else(|| JsValue::from_str("no window"))?;
        let mut options = RevealOptions::default();
        if let Some(t) = threshold {
            options = options.with_threshold(t).map_err(js_err)?;
        }
        if let Some(m) = mode {
            options = options.with_mode(m.parse::<RevealMode>().map_err(js_err)?);
        }
        let variant = style::variant_for_attr(variant.as_deref());
        let binding = reveal::RevealBinding::new(&hub, variant, options, move |snapshot| {
            if let Some(f) = on_change.as_ref() {
                if let Err(e) = f.call2(
                    &JsValue::NULL,
                    &JsValue::from_bool(snapshot.is_visible),
                    &JsValue::from_str(snapshot.scroll_direction.as_str()),
                ) {
                    log::warn!("[reveal] on_change threw: {:?}", e);
                }
            }
        });
        Ok(RevealHandle { binding })
    }

    /// Attach (or re-attach) the observed element.
    pub fn attach(&mut self, element: web::Element) {
        self.binding.attach(element);
    }

    pub fn detach(&mut self) {
        self.binding.detach();
    }

    #[wasm_bindgen(getter, js_name = elementRef)]
    pub fn element_ref(&self) -> Option<web::Element> {
        self.binding.element()
    }

    #[wasm_bindgen(getter, js_name = isVisible)]
    pub fn is_visible(&self) -> bool {
        self.binding.snapshot().is_visible
    }

    #[wasm_bindgen(getter, js_name = scrollDirection)]
    pub fn scroll_direction(&self) -> String {
        self.binding.snapshot().scroll_direction.to_string()
    }
}

/// `{ elementRef, offset }` for one image-bearing card.
#[wasm_bindgen]
pub struct ParallaxHandle {
    binding: parallax::ParallaxBinding,
}

#[wasm_bindgen]
impl ParallaxHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(element: web::Element, target: Option<web::Element>) -> Result<ParallaxHandle, JsValue> {
        let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let source = scroll::window_source().ok_or_else(|| JsValue::from_str("no window"))?;
        let target = target.or_else(|| parallax::target_for(&element));
        let binding = parallax::ParallaxBinding::mount(&*source, &window, element, target);
        Ok(ParallaxHandle { binding })
    }

    #[wasm_bindgen(getter, js_name = elementRef)]
    pub fn element_ref(&self) -> web::Element {
        self.binding.element().clone()
    }

    #[wasm_bindgen(getter)]
    pub fn offset(&self) -> f64 {
        self.binding.offset()
    }
}

/// Ordered particle batch for a renderer that draws its own glyphs.
/// `seed` is a `BigInt`, matching `data-particle-seed`.
#[wasm_bindgen(js_name = generateParticles)]
pub fn generate_particles(viewport_width: Option<f64>, seed: Option<u64>) -> js_sys::Array {
    let width = viewport_width
        .or_else(|| web::window().map(|w| dom::viewport(&w).width))
        .unwrap_or(0.0);
    let field = particles::generate(width, seed);
    field.iter().map(particles::to_js).collect()
}
