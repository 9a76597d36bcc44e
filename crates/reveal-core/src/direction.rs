use std::fmt;

/// Direction of the most recent vertical scroll delta on the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    #[default]
    None,
    Up,
    Down,
}

impl ScrollDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrollDirection::None => "none",
            ScrollDirection::Up => "up",
            ScrollDirection::Down => "down",
        }
    }
}

impl fmt::Display for ScrollDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Last recorded scroll position and the direction derived from it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollCursor {
    last_y: f64,
    direction: ScrollDirection,
}

impl ScrollCursor {
    pub fn new(initial_y: f64) -> Self {
        Self {
            last_y: initial_y,
            direction: ScrollDirection::None,
        }
    }

    #[inline]
    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    #[inline]
    pub fn last_y(&self) -> f64 {
        self.last_y
    }

    /// Record a new position. Returns the new direction when it differs
    /// from the previous one; an unchanged position leaves it as is.
    pub fn record(&mut self, y: f64) -> Option<ScrollDirection> {
        let next = if y > self.last_y {
            ScrollDirection::Down
        } else if y < self.last_y {
            ScrollDirection::Up
        } else {
            self.direction
        };
        // NaN compares false both ways; keep the last good position.
        if !y.is_nan() {
            self.last_y = y;
        }
        if next != self.direction {
            self.direction = next;
            Some(next)
        } else {
            None
        }
    }
}
