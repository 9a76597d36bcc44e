use crate::constants::{PARALLAX_DAMPING, PARALLAX_MAX_OFFSET_PX};
use crate::error::{ConfigError, Result};
use crate::geometry::{Rect, Viewport};
use crate::listener::{ListenerGuard, ScrollSource};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxConfig {
    pub damping: f64,
    pub max_offset: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            damping: PARALLAX_DAMPING,
            max_offset: PARALLAX_MAX_OFFSET_PX,
        }
    }
}

impl ParallaxConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.damping.is_finite() {
            return Err(ConfigError::Parallax {
                name: "damping",
                value: self.damping,
            });
        }
        if !self.max_offset.is_finite() || self.max_offset < 0.0 {
            return Err(ConfigError::Parallax {
                name: "max_offset",
                value: self.max_offset,
            });
        }
        Ok(())
    }
}

/// Offset for an element whose bounds are `bounds`: the distance from the
/// viewport center to the element center, damped and clamped.
#[inline]
pub fn parallax_offset(bounds: Rect, viewport: Viewport, config: &ParallaxConfig) -> f64 {
    let raw = (viewport.center_y() - bounds.center_y()) * config.damping;
    if !raw.is_finite() {
        return 0.0;
    }
    raw.clamp(-config.max_offset, config.max_offset)
}

type Probe = Box<dyn Fn() -> Option<(Rect, Viewport)>>;

struct Shared {
    offset: Cell<f64>,
    config: ParallaxConfig,
    probe: Probe,
    on_change: Box<dyn Fn(f64)>,
}

impl Shared {
    fn recompute(&self) {
        let Some((bounds, viewport)) = (self.probe)() else {
            return;
        };
        let next = parallax_offset(bounds, viewport, &self.config);
        if self.offset.replace(next) != next {
            (self.on_change)(next);
        }
    }
}

/// Scroll-linked offset for one element. Owns its own scroll listener.
pub struct ParallaxTracker {
    _listener: ListenerGuard,
    shared: Rc<Shared>,
}

impl ParallaxTracker {
    /// Bind to `source`. `probe` reads the element's current bounds and the
    /// viewport, returning `None` while the element is not attached.
    pub fn bind(
        source: &dyn ScrollSource,
        config: ParallaxConfig,
        probe: impl Fn() -> Option<(Rect, Viewport)> + 'static,
        on_change: impl Fn(f64) + 'static,
    ) -> Self {
        let shared = Rc::new(Shared {
            offset: Cell::new(0.0),
            config,
            probe: Box::new(probe),
            on_change: Box::new(on_change),
        });
        shared.recompute();
        let weak = Rc::downgrade(&shared);
        let listener = source.listen(Rc::new(move |_y: f64| {
            if let Some(shared) = weak.upgrade() {
                shared.recompute();
            }
        }));
        Self {
            _listener: listener,
            shared,
        }
    }

    pub fn offset(&self) -> f64 {
        self.shared.offset.get()
    }

    /// Re-read geometry outside of a scroll event (e.g. after layout).
    pub fn refresh(&self) {
        self.shared.recompute();
    }
}
