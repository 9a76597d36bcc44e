//! Ambient particle field.
//!
//! A field is generated once from the viewport width at mount time and is
//! never patched afterwards; callers that want a different field generate
//! a new one.

use crate::constants::*;
use crate::error::{ConfigError, Result};
use rand::Rng;
use std::ops::RangeInclusive;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub duration: f64,
    pub delay: f64,
    pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleConfig {
    pub narrow_max_width: f64,
    pub narrow_count: usize,
    pub wide_count: usize,
    pub position: RangeInclusive<f64>,
    pub size: RangeInclusive<f64>,
    pub duration: RangeInclusive<f64>,
    pub delay: RangeInclusive<f64>,
    pub opacity: RangeInclusive<f64>,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            narrow_max_width: NARROW_VIEWPORT_MAX_WIDTH,
            narrow_count: NARROW_PARTICLE_COUNT,
            wide_count: WIDE_PARTICLE_COUNT,
            position: PARTICLE_POSITION_PCT,
            size: PARTICLE_SIZE_PX,
            duration: PARTICLE_DURATION_SEC,
            delay: PARTICLE_DELAY_SEC,
            opacity: PARTICLE_OPACITY,
        }
    }
}

impl ParticleConfig {
    pub fn validate(&self) -> Result<()> {
        let ranges = [
            ("position", &self.position),
            ("size", &self.size),
            ("duration", &self.duration),
            ("delay", &self.delay),
            ("opacity", &self.opacity),
        ];
        for (name, range) in ranges {
            let (lo, hi) = (*range.start(), *range.end());
            if !(lo.is_finite() && hi.is_finite() && lo <= hi) {
                return Err(ConfigError::Range { name, lo, hi });
            }
        }
        Ok(())
    }

    #[inline]
    pub fn count_for_width(&self, viewport_width: f64) -> usize {
        if viewport_width < self.narrow_max_width {
            self.narrow_count
        } else {
            self.wide_count
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn generate<R: Rng + ?Sized>(viewport_width: f64, rng: &mut R) -> Self {
        Self::generate_with(&ParticleConfig::default(), viewport_width, rng)
    }

    /// An invalid `config` (see [`ParticleConfig::validate`]) is replaced by
    /// the default one.
    pub fn generate_with<R: Rng + ?Sized>(
        config: &ParticleConfig,
        viewport_width: f64,
        rng: &mut R,
    ) -> Self {
        let fallback;
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("[particles] {e}; using default config");
                fallback = ParticleConfig::default();
                &fallback
            }
        };
        let count = config.count_for_width(viewport_width);
        let particles = (0..count as u32)
            .map(|id| Particle {
                id,
                x: rng.gen_range(config.position.clone()),
                y: rng.gen_range(config.position.clone()),
                size: rng.gen_range(config.size.clone()),
                duration: rng.gen_range(config.duration.clone()),
                delay: rng.gen_range(config.delay.clone()),
                opacity: rng.gen_range(config.opacity.clone()),
            })
            .collect::<Vec<_>>();
        log::debug!(
            "[particles] generated {} particles for viewport width {:.0}",
            particles.len(),
            viewport_width
        );
        Self { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }
}

impl<'a> IntoIterator for &'a ParticleField {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}
