//! Viewport-space geometry.
//!
//! `Rect` mirrors the shape of a DOM bounding client rect: `y` is the
//! distance from the top of the viewport, so it goes negative once the node
//! has scrolled past the top edge.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center_y(&self) -> f64 {
        self.height / 2.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Same rect shifted up by `dy` pixels, i.e. as seen after scrolling
    /// the page down by `dy`.
    pub fn scrolled_by(&self, dy: f64) -> Self {
        Self {
            y: self.y - dy,
            ..*self
        }
    }

    /// Visible fraction of this rect's area inside `viewport`, in `[0, 1]`.
    ///
    /// A zero-area rect counts as fully visible when it lies inside the
    /// viewport bounds, matching how browsers report degenerate targets.
    pub fn intersection_ratio(&self, viewport: Viewport) -> f64 {
        let left = self.x.max(0.0);
        let right = (self.x + self.width).min(viewport.width);
        let top = self.top().max(0.0);
        let bottom = self.bottom().min(viewport.height);
        if right < left || bottom < top {
            return 0.0;
        }
        let area = self.width * self.height;
        if area <= 0.0 {
            return 1.0;
        }
        (((right - left) * (bottom - top)) / area).clamp(0.0, 1.0)
    }

    pub fn intersects(&self, viewport: Viewport) -> bool {
        self.x <= viewport.width
            && self.x + self.width >= 0.0
            && self.top() <= viewport.height
            && self.bottom() >= 0.0
    }
}
