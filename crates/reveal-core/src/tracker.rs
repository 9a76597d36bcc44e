//! Per-element reveal tracking.
//!
//! A `RevealTracker` combines the element's own visibility flag with the
//! page direction from the shared `ScrollHub`. All callbacks it hands out
//! hold weak references, so events arriving after the tracker is dropped
//! are ignored.

use crate::direction::ScrollDirection;
use crate::hub::{ScrollHub, Subscription};
use crate::listener::ListenerGuard;
use crate::visibility::{IntersectionSample, RevealOptions, Visibility};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealSnapshot {
    pub is_visible: bool,
    pub scroll_direction: ScrollDirection,
}

/// How a hidden element is offset relative to its resting place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealVariant {
    /// Hidden elements sit on the side the page is scrolling away from.
    #[default]
    Directional,
    /// Hidden elements always rise from below.
    Rise,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPose {
    Visible,
    HiddenBelow,
    HiddenAbove,
}

impl RevealPose {
    pub fn from_snapshot(variant: RevealVariant, snapshot: RevealSnapshot) -> Self {
        if snapshot.is_visible {
            return RevealPose::Visible;
        }
        match (variant, snapshot.scroll_direction) {
            (RevealVariant::Directional, ScrollDirection::Down) => RevealPose::HiddenAbove,
            _ => RevealPose::HiddenBelow,
        }
    }
}

struct Shared {
    visibility: RefCell<Visibility>,
    direction: Cell<ScrollDirection>,
    on_change: Box<dyn Fn(RevealSnapshot)>,
}

impl Shared {
    fn snapshot(&self) -> RevealSnapshot {
        RevealSnapshot {
            is_visible: self.visibility.borrow().is_visible(),
            scroll_direction: self.direction.get(),
        }
    }

    fn apply_sample(&self, sample: IntersectionSample) {
        let changed = self.visibility.borrow_mut().apply(sample);
        if changed {
            (self.on_change)(self.snapshot());
        }
    }

    fn set_direction(&self, direction: ScrollDirection) {
        if self.direction.replace(direction) != direction {
            (self.on_change)(self.snapshot());
        }
    }

    fn force_visible(&self) {
        let changed = self.visibility.borrow_mut().force_visible();
        if changed {
            (self.on_change)(self.snapshot());
        }
    }
}

/// Delivery end of an intersection observation.
#[derive(Clone)]
pub struct IntersectionSink {
    target: Weak<Shared>,
}

impl IntersectionSink {
    /// Feed one sample; a no-op once the tracker is gone.
    pub fn deliver(&self, sample: IntersectionSample) {
        if let Some(shared) = self.target.upgrade() {
            shared.apply_sample(sample);
        }
    }

    pub fn is_live(&self) -> bool {
        self.target.strong_count() > 0
    }
}

pub struct RevealTracker {
    // Field order is drop order: observation, then the hub subscription.
    observation: Option<ListenerGuard>,
    _direction: Subscription,
    shared: Rc<Shared>,
    options: RevealOptions,
}

impl RevealTracker {
    pub fn new(
        hub: &ScrollHub,
        options: RevealOptions,
        on_change: impl Fn(RevealSnapshot) + 'static,
    ) -> Self {
        let shared = Rc::new(Shared {
            visibility: RefCell::new(Visibility::new(options.mode(), options.threshold())),
            direction: Cell::new(ScrollDirection::None),
            on_change: Box::new(on_change),
        });
        let weak = Rc::downgrade(&shared);
        let subscription = hub.subscribe(move |direction| {
            if let Some(shared) = weak.upgrade() {
                shared.set_direction(direction);
            }
        });
        shared.direction.set(hub.direction());
        Self {
            observation: None,
            _direction: subscription,
            shared,
            options,
        }
    }

    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    pub fn snapshot(&self) -> RevealSnapshot {
        self.shared.snapshot()
    }

    pub fn is_visible(&self) -> bool {
        self.shared.visibility.borrow().is_visible()
    }

    pub fn scroll_direction(&self) -> ScrollDirection {
        self.shared.direction.get()
    }

    pub fn is_observing(&self) -> bool {
        self.observation.is_some()
    }

    pub fn sink(&self) -> IntersectionSink {
        IntersectionSink {
            target: Rc::downgrade(&self.shared),
        }
    }

    /// Start observing through `acquire`, replacing any earlier
    /// observation. When `acquire` returns `None` the intersection
    /// capability is missing and the element is treated as visible.
    pub fn observe_with(
        &mut self,
        acquire: impl FnOnce(IntersectionSink) -> Option<ListenerGuard>,
    ) {
        self.observation = None;
        match acquire(self.sink()) {
            Some(guard) => self.observation = Some(guard),
            None => {
                log::warn!("[reveal] intersection observation unavailable; showing element");
                self.shared.force_visible();
            }
        }
    }

    /// Stop observing the current node. Visibility keeps its last value.
    pub fn unobserve(&mut self) {
        self.observation = None;
    }
}
