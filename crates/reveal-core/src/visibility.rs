use crate::constants::{DEFAULT_REVEAL_THRESHOLD, DEFAULT_ROOT_MARGIN};
use crate::error::{parse_f64, ConfigError, Result};
use crate::geometry::{Rect, Viewport};
use std::str::FromStr;

/// Whether a revealed element can hide again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealMode {
    /// `unseen -> seen`, terminal.
    Once,
    /// `hidden <-> visible`, follows enter and exit samples.
    #[default]
    Toggle,
}

impl FromStr for RevealMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "once" => Ok(RevealMode::Once),
            "toggle" | "" => Ok(RevealMode::Toggle),
            other => Err(ConfigError::RevealMode(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    threshold: f64,
    root_margin: String,
    mode: RevealMode,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_REVEAL_THRESHOLD,
            root_margin: DEFAULT_ROOT_MARGIN.to_string(),
            mode: RevealMode::default(),
        }
    }
}

impl RevealOptions {
    pub fn with_threshold(mut self, threshold: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::Threshold(threshold));
        }
        self.threshold = threshold;
        Ok(self)
    }

    pub fn with_root_margin(mut self, margin: impl Into<String>) -> Self {
        self.root_margin = margin.into();
        self
    }

    pub fn with_mode(mut self, mode: RevealMode) -> Self {
        self.mode = mode;
        self
    }

    /// Build options from optional textual attributes; absent values keep
    /// their defaults.
    pub fn parse(
        threshold: Option<&str>,
        mode: Option<&str>,
        root_margin: Option<&str>,
    ) -> Result<Self> {
        let mut opts = Self::default();
        if let Some(t) = threshold {
            opts = opts.with_threshold(parse_f64("threshold", t)?)?;
        }
        if let Some(m) = mode {
            opts = opts.with_mode(m.parse()?);
        }
        if let Some(margin) = root_margin.map(str::trim).filter(|m| !m.is_empty()) {
            opts = opts.with_root_margin(margin);
        }
        Ok(opts)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn root_margin(&self) -> &str {
        &self.root_margin
    }

    pub fn mode(&self) -> RevealMode {
        self.mode
    }
}

/// One intersection report for an observed node.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl IntersectionSample {
    pub fn new(is_intersecting: bool, ratio: f64) -> Self {
        Self {
            is_intersecting,
            ratio,
        }
    }

    /// Sample for `bounds` as the browser would report it for `viewport`.
    pub fn measure(bounds: Rect, viewport: Viewport) -> Self {
        Self {
            is_intersecting: bounds.intersects(viewport),
            ratio: bounds.intersection_ratio(viewport),
        }
    }

    #[inline]
    pub fn qualifies(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio >= threshold
    }
}

/// Visibility flag for one tracked node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visibility {
    mode: RevealMode,
    threshold: f64,
    visible: bool,
}

impl Visibility {
    pub fn new(mode: RevealMode, threshold: f64) -> Self {
        Self {
            mode,
            threshold,
            visible: false,
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Apply a sample; returns true when the flag changed.
    pub fn apply(&mut self, sample: IntersectionSample) -> bool {
        let next = match (self.mode, self.visible) {
            (RevealMode::Once, true) => true,
            _ => sample.qualifies(self.threshold),
        };
        let changed = next != self.visible;
        self.visible = next;
        changed
    }

    /// Mark visible without a sample (fail-open path).
    pub fn force_visible(&mut self) -> bool {
        let changed = !self.visible;
        self.visible = true;
        changed
    }
}
