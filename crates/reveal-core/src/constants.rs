use std::ops::RangeInclusive;

// Default tuning shared by the web front-end and host tests.

// Reveal
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1; // fraction of the node that must be on screen
pub const DEFAULT_ROOT_MARGIN: &str = "0px";

// Particle field
pub const NARROW_VIEWPORT_MAX_WIDTH: f64 = 768.0; // widths strictly below are "narrow"
pub const NARROW_PARTICLE_COUNT: usize = 20;
pub const WIDE_PARTICLE_COUNT: usize = 35;

pub const PARTICLE_POSITION_PCT: RangeInclusive<f64> = 0.0..=100.0;
pub const PARTICLE_SIZE_PX: RangeInclusive<f64> = 2.0..=6.0;
pub const PARTICLE_DURATION_SEC: RangeInclusive<f64> = 6.0..=14.0;
pub const PARTICLE_DELAY_SEC: RangeInclusive<f64> = 0.0..=5.0;
pub const PARTICLE_OPACITY: RangeInclusive<f64> = 0.2..=0.8;

// Parallax
pub const PARALLAX_DAMPING: f64 = 0.15; // px of offset per px of distance from viewport center
pub const PARALLAX_MAX_OFFSET_PX: f64 = 30.0;
