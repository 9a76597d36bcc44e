use reveal_core::{Rect, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn viewport(window: &web::Window) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(width, height)
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

#[inline]
pub fn bounds(el: &web::Element) -> Rect {
    let rect = el.get_bounding_client_rect();
    Rect::new(rect.x(), rect.y(), rect.width(), rect.height())
}

pub fn query_all(root: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("[page] bad selector {selector:?}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

/// Replace every token in `remove` with the tokens of `add`.
pub fn swap_classes<'a>(
    el: &web::Element,
    remove: impl IntoIterator<Item = &'a str>,
    add: &str,
) {
    let cl = el.class_list();
    for token in remove {
        _ = cl.remove_1(token);
    }
    for token in add.split_whitespace() {
        _ = cl.add_1(token);
    }
}

pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(property, value);
    }
}

#[inline]
pub fn attr(el: &web::Element, name: &str) -> Option<String> {
    el.get_attribute(name)
}
