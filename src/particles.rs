use crate::constants::*;
use crate::{dom, style};
use rand::rngs::StdRng;
use rand::SeedableRng;
use reveal_core::{Particle, ParticleField};
use wasm_bindgen::JsValue;
use web_sys as web;

/// Generate a field, seeded when `seed` is given.
pub fn generate(viewport_width: f64, seed: Option<u64>) -> ParticleField {
    match seed {
        Some(seed) => ParticleField::generate(viewport_width, &mut StdRng::seed_from_u64(seed)),
        None => ParticleField::generate(viewport_width, &mut rand::thread_rng()),
    }
}

/// Particle glyphs rendered into a container; removed again on drop.
pub struct ParticleLayer {
    field: ParticleField,
    glyphs: Vec<web::Element>,
}

impl ParticleLayer {
    pub fn mount(
        document: &web::Document,
        container: &web::Element,
        field: ParticleField,
    ) -> anyhow::Result<Self> {
        // Built up front so a failed mount removes what it already appended.
        let mut layer = Self {
            glyphs: Vec::with_capacity(field.len()),
            field,
        };
        for p in layer.field.iter() {
            let glyph = document
                .create_element("div")
                .map_err(|e| anyhow::anyhow!("create particle glyph: {:?}", e))?;
            glyph.set_class_name(PARTICLE_CLASS);
            _ = glyph.set_attribute("style", &style::particle_style(p));
            _ = glyph.set_attribute("data-particle-id", &p.id.to_string());
            container
                .append_child(&glyph)
                .map_err(|e| anyhow::anyhow!("append particle glyph: {:?}", e))?;
            layer.glyphs.push(glyph);
        }
        log::info!("[particles] rendered {} glyphs", layer.glyphs.len());
        Ok(layer)
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }
}

impl Drop for ParticleLayer {
    fn drop(&mut self) {
        for glyph in self.glyphs.drain(..) {
            glyph.remove();
        }
    }
}

/// Mount the layer into `#particle-field` if the page has one.
pub fn mount_page_layer(
    document: &web::Document,
    window: &web::Window,
) -> anyhow::Result<Option<ParticleLayer>> {
    let Some(container) = document.get_element_by_id(PARTICLE_CONTAINER_ID) else {
        return Ok(None);
    };
    let seed = dom::attr(&container, ATTR_PARTICLE_SEED).and_then(|s| {
        s.trim()
            .parse::<u64>()
            .map_err(|_| log::warn!("[particles] ignoring {ATTR_PARTICLE_SEED}={s:?}"))
            .ok()
    });
    let field = generate(dom::viewport(window).width, seed);
    ParticleLayer::mount(document, &container, field).map(Some)
}

/// Plain JS object for one particle.
pub fn to_js(p: &Particle) -> JsValue {
    let obj = js_sys::Object::new();
    let set = |key: &str, value: JsValue| {
        _ = js_sys::Reflect::set(&obj, &JsValue::from_str(key), &value);
    };
    set("id", JsValue::from(p.id));
    set("x", JsValue::from_f64(p.x));
    set("y", JsValue::from_f64(p.y));
    set("size", JsValue::from_f64(p.size));
    set("duration", JsValue::from_f64(p.duration));
    set("delay", JsValue::from_f64(p.delay));
    set("opacity", JsValue::from_f64(p.opacity));
    obj.into()
}
