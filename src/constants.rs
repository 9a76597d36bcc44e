// DOM hooks and class tokens used by the page wiring.

// Selectors and ids
pub const REVEAL_SELECTOR: &str = "[data-reveal]";
pub const PARALLAX_SELECTOR: &str = "[data-parallax]";
pub const PARTICLE_CONTAINER_ID: &str = "particle-field";
pub const DEFAULT_PARALLAX_TARGET: &str = "img";

// Attributes
pub const ATTR_REVEAL: &str = "data-reveal"; // "rise" selects the header variant
pub const ATTR_REVEAL_THRESHOLD: &str = "data-reveal-threshold";
pub const ATTR_REVEAL_MODE: &str = "data-reveal-mode";
pub const ATTR_REVEAL_MARGIN: &str = "data-reveal-margin";
pub const ATTR_REVEAL_DELAY: &str = "data-reveal-delay"; // milliseconds
pub const ATTR_PARALLAX_TARGET: &str = "data-parallax-target";
pub const ATTR_PARTICLE_SEED: &str = "data-particle-seed";

// Reveal class tokens per pose
pub const CLASS_VISIBLE: &str = "opacity-100 translate-y-0";
pub const CLASS_HIDDEN_BELOW: &str = "opacity-0 translate-y-16";
pub const CLASS_HIDDEN_ABOVE: &str = "opacity-0 -translate-y-16";
pub const CLASS_RISE_HIDDEN: &str = "opacity-0 translate-y-8";

// Parallax imagery is scaled up so the offset never exposes the frame edge.
pub const PARALLAX_IMAGE_SCALE: f64 = 1.1;

// Particle glyphs
pub const PARTICLE_CLASS: &str = "absolute rounded-full animate-firefly";
pub const PARTICLE_FILL: &str =
    "radial-gradient(circle, hsl(48 96% 70%) 0%, hsl(142 76% 50% / 0.5) 50%, transparent 70%)";
pub const PARTICLE_GLOW_INNER: f64 = 3.0; // box-shadow blur multiples of size
pub const PARTICLE_GLOW_OUTER: f64 = 6.0;
