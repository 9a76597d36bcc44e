use crate::constants::*;
use crate::{dom, style};
use reveal_core::{
    IntersectionSample, IntersectionSink, ListenerGuard, RevealOptions, RevealSnapshot,
    RevealTracker, RevealVariant, ScrollHub,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub fn intersection_observer_supported(window: &web::Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Observe `element` with an `IntersectionObserver`. `None` when the API is
/// missing or refuses the options.
fn observe(
    element: &web::Element,
    options: &RevealOptions,
    sink: IntersectionSink,
) -> Option<ListenerGuard> {
    let window = web::window()?;
    if !intersection_observer_supported(&window) {
        return None;
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                    sink.deliver(IntersectionSample::new(
                        entry.is_intersecting(),
                        entry.intersection_ratio(),
                    ));
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold()));
    init.set_root_margin(options.root_margin());
    let observer =
        match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        {
            Ok(o) => o,
            Err(e) => {
                log::warn!("[reveal] IntersectionObserver rejected options: {:?}", e);
                return None;
            }
        };
    observer.observe(element);

    Some(ListenerGuard::new(move || {
        observer.disconnect();
        drop(callback);
    }))
}

/// Reveal-on-scroll binding for one element: keeps the element's classes
/// in sync with its tracker and forwards each change to `notify`.
pub struct RevealBinding {
    tracker: RevealTracker,
    element: Rc<RefCell<Option<web::Element>>>,
    variant: RevealVariant,
}

impl RevealBinding {
    pub fn new(
        hub: &ScrollHub,
        variant: RevealVariant,
        options: RevealOptions,
        notify: impl Fn(RevealSnapshot) + 'static,
    ) -> Self {
        let element: Rc<RefCell<Option<web::Element>>> = Rc::new(RefCell::new(None));
        let target = element.clone();
        let tracker = RevealTracker::new(hub, options, move |snapshot| {
            if let Some(el) = target.borrow().as_ref() {
                apply_classes(el, variant, snapshot);
            }
            notify(snapshot);
        });
        Self {
            tracker,
            element,
            variant,
        }
    }

    /// Bind to `element`, replacing any previously attached node.
    pub fn attach(&mut self, element: web::Element) {
        apply_classes(&element, self.variant, self.tracker.snapshot());
        *self.element.borrow_mut() = Some(element.clone());
        let options = self.tracker.options().clone();
        self.tracker
            .observe_with(|sink| observe(&element, &options, sink));
    }

    pub fn detach(&mut self) {
        self.tracker.unobserve();
        *self.element.borrow_mut() = None;
    }

    pub fn snapshot(&self) -> RevealSnapshot {
        self.tracker.snapshot()
    }

    pub fn element(&self) -> Option<web::Element> {
        self.element.borrow().clone()
    }
}

fn apply_classes(el: &web::Element, variant: RevealVariant, snapshot: RevealSnapshot) {
    dom::swap_classes(
        el,
        style::all_reveal_tokens(),
        style::reveal_classes(variant, snapshot),
    );
}

/// Bind every `[data-reveal]` element in `document`.
pub fn mount_all(document: &web::Document, hub: &ScrollHub) -> Vec<RevealBinding> {
    dom::query_all(document, REVEAL_SELECTOR)
        .into_iter()
        .map(|el| {
            let variant = style::variant_for_attr(dom::attr(&el, ATTR_REVEAL).as_deref());
            let options = options_from_attrs(&el);
            if let Some(delay) = dom::attr(&el, ATTR_REVEAL_DELAY) {
                match delay.trim().parse::<u32>() {
                    Ok(ms) => dom::set_style(&el, "transition-delay", &style::transition_delay(ms)),
                    Err(_) => log::warn!("[reveal] ignoring {ATTR_REVEAL_DELAY}={delay:?}"),
                }
            }
            let mut binding = RevealBinding::new(hub, variant, options, |_| {});
            binding.attach(el);
            binding
        })
        .collect()
}

fn options_from_attrs(el: &web::Element) -> RevealOptions {
    let threshold = dom::attr(el, ATTR_REVEAL_THRESHOLD);
    let mode = dom::attr(el, ATTR_REVEAL_MODE);
    let margin = dom::attr(el, ATTR_REVEAL_MARGIN);
    RevealOptions::parse(threshold.as_deref(), mode.as_deref(), margin.as_deref()).unwrap_or_else(
        |e| {
            log::warn!("[reveal] {e}; using defaults");
            RevealOptions::default()
        },
    )
}
