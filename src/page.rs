use crate::{parallax, particles, reveal, scroll};
use std::cell::RefCell;
use web_sys as web;

/// Everything the page wired up at start. Dropping it releases every
/// observer, listener and particle glyph.
pub struct Page {
    reveals: Vec<reveal::RevealBinding>,
    parallax: Vec<parallax::ParallaxBinding>,
    particles: Option<particles::ParticleLayer>,
}

impl Page {
    pub fn mount(window: &web::Window, document: &web::Document) -> anyhow::Result<Self> {
        let hub = scroll::shared_hub().ok_or_else(|| anyhow::anyhow!("no scroll hub"))?;
        let source = scroll::window_source().ok_or_else(|| anyhow::anyhow!("no scroll source"))?;

        let reveals = reveal::mount_all(document, &hub);
        let parallax = parallax::mount_all(document, &*source, window);
        let particles = match particles::mount_page_layer(document, window) {
            Ok(layer) => layer,
            Err(e) => {
                log::warn!("[particles] skipped: {:?}", e);
                None
            }
        };

        log::info!(
            "[page] mounted reveal={} parallax={} particles={}",
            reveals.len(),
            parallax.len(),
            particles.as_ref().map(|l| l.field().len()).unwrap_or(0)
        );
        Ok(Self {
            reveals,
            parallax,
            particles,
        })
    }
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

pub fn install(page: Page) {
    let previous = PAGE.with(|slot| slot.borrow_mut().replace(page));
    drop(previous);
}

/// Drop the mounted page, if any. Returns whether one was mounted.
pub fn uninstall() -> bool {
    let page = PAGE.with(|slot| slot.borrow_mut().take());
    match page {
        Some(page) => {
            log::info!(
                "[page] unmounting reveal={} parallax={} particles={}",
                page.reveals.len(),
                page.parallax.len(),
                page.particles.is_some()
            );
            drop(page);
            true
        }
        None => false,
    }
}
