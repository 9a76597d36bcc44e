use crate::constants::*;
use crate::{dom, style};
use reveal_core::{ParallaxConfig, ParallaxTracker, ScrollSource};
use web_sys as web;

/// Scroll-linked counter-translation of a card's image.
pub struct ParallaxBinding {
    tracker: ParallaxTracker,
    element: web::Element,
}

impl ParallaxBinding {
    /// Measure `element` and write the transform to `target` (defaults to
    /// the element itself).
    pub fn mount(
        source: &dyn ScrollSource,
        window: &web::Window,
        element: web::Element,
        target: Option<web::Element>,
    ) -> Self {
        let target = target.unwrap_or_else(|| element.clone());
        let probe_el = element.clone();
        let probe_window = window.clone();
        let write_target = target.clone();
        let tracker = ParallaxTracker::bind(
            source,
            ParallaxConfig::default(),
            move || {
                probe_el
                    .is_connected()
                    .then(|| (dom::bounds(&probe_el), dom::viewport(&probe_window)))
            },
            move |offset| {
                dom::set_style(&write_target, "transform", &style::parallax_transform(offset));
            },
        );
        dom::set_style(&target, "transform", &style::parallax_transform(tracker.offset()));
        Self { tracker, element }
    }

    pub fn offset(&self) -> f64 {
        self.tracker.offset()
    }

    pub fn element(&self) -> &web::Element {
        &self.element
    }
}

/// Resolve the image an element's parallax applies to.
pub fn target_for(el: &web::Element) -> Option<web::Element> {
    let selector = dom::attr(el, ATTR_PARALLAX_TARGET);
    let selector = selector.as_deref().unwrap_or(DEFAULT_PARALLAX_TARGET);
    el.query_selector(selector).ok().flatten()
}

/// Bind every `[data-parallax]` element in `document`.
pub fn mount_all(
    document: &web::Document,
    source: &dyn ScrollSource,
    window: &web::Window,
) -> Vec<ParallaxBinding> {
    dom::query_all(document, PARALLAX_SELECTOR)
        .into_iter()
        .map(|el| {
            let target = target_for(&el);
            if target.is_none() {
                log::debug!("[parallax] no target image; transforming the element itself");
            }
            ParallaxBinding::mount(source, window, el, target)
        })
        .collect()
}
