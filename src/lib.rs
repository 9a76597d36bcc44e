#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod bindings;
mod constants;
mod dom;
mod page;
mod parallax;
mod particles;
mod reveal;
mod scroll;
mod style;

pub use bindings::{generate_particles, ParallaxHandle, RevealHandle};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("reveal-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    page::install(page::Page::mount(&window, &document)?);
    Ok(())
}

/// Release every binding the page wired at start.
#[wasm_bindgen(js_name = unmountPage)]
pub fn unmount_page() -> bool {
    page::uninstall()
}

/// Re-scan the document, e.g. after the host page swapped its content.
#[wasm_bindgen(js_name = remountPage)]
pub fn remount_page() -> Result<(), JsValue> {
    page::uninstall();
    init().map_err(|e| JsValue::from_str(&format!("{e:?}")))
}
