// Presentation mapping from core values to class tokens and inline styles.
// No `web_sys` here; the host tests include this file directly.

use crate::constants::*;
use reveal_core::{Particle, RevealPose, RevealSnapshot, RevealVariant};

/// Every token any pose may add; removed before the current pose is applied.
pub fn all_reveal_tokens() -> impl Iterator<Item = &'static str> {
    [
        CLASS_VISIBLE,
        CLASS_HIDDEN_BELOW,
        CLASS_HIDDEN_ABOVE,
        CLASS_RISE_HIDDEN,
    ]
    .into_iter()
    .flat_map(str::split_whitespace)
}

#[inline]
pub fn reveal_classes(variant: RevealVariant, snapshot: RevealSnapshot) -> &'static str {
    match (variant, RevealPose::from_snapshot(variant, snapshot)) {
        (_, RevealPose::Visible) => CLASS_VISIBLE,
        (RevealVariant::Rise, _) => CLASS_RISE_HIDDEN,
        (_, RevealPose::HiddenAbove) => CLASS_HIDDEN_ABOVE,
        (_, RevealPose::HiddenBelow) => CLASS_HIDDEN_BELOW,
    }
}

pub fn variant_for_attr(value: Option<&str>) -> RevealVariant {
    match value.map(str::trim) {
        Some("rise") | Some("header") => RevealVariant::Rise,
        _ => RevealVariant::Directional,
    }
}

#[inline]
pub fn parallax_transform(offset: f64) -> String {
    format!("translateY({offset:.2}px) scale({PARALLAX_IMAGE_SCALE})")
}

pub fn transition_delay(delay_ms: u32) -> String {
    format!("{delay_ms}ms")
}

pub fn particle_style(p: &Particle) -> String {
    format!(
        "position:absolute;border-radius:50%;background:{PARTICLE_FILL};\
         left:{x:.3}%;top:{y:.3}%;width:{s:.2}px;height:{s:.2}px;\
         animation-duration:{d:.2}s;animation-delay:{dl:.2}s;opacity:{o:.2};\
         box-shadow:0 0 {g1:.1}px hsl(48 96% 53% / 0.6), 0 0 {g2:.1}px hsl(142 76% 50% / 0.3);",
        x = p.x,
        y = p.y,
        s = p.size,
        d = p.duration,
        dl = p.delay,
        o = p.opacity,
        g1 = p.size * PARTICLE_GLOW_INNER,
        g2 = p.size * PARTICLE_GLOW_OUTER,
    )
}
