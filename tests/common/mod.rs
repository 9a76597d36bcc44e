// Host-side stand-in for the browser window's scroll events.

#![allow(dead_code)]
use reveal_core::{ListenerGuard, ScrollSource};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

#[derive(Default)]
struct Inner {
    scroll_y: Cell<f64>,
    listeners: RefCell<Vec<(u64, Rc<dyn Fn(f64)>)>>,
    next_id: Cell<u64>,
    attached_total: Cell<usize>,
}

#[derive(Clone, Default)]
pub struct FakeWindow {
    inner: Rc<Inner>,
}

impl FakeWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(y: f64) -> Self {
        let w = Self::new();
        w.inner.scroll_y.set(y);
        w
    }

    /// Move to `y` and fire one scroll event.
    pub fn scroll_to(&self, y: f64) {
        self.inner.scroll_y.set(y);
        let listeners: Vec<_> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for l in listeners {
            l(y);
        }
    }

    pub fn scroll_by(&self, dy: f64) {
        self.scroll_to(self.inner.scroll_y.get() + dy);
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Total listeners ever attached, including released ones.
    pub fn attached_total(&self) -> usize {
        self.inner.attached_total.get()
    }

    pub fn as_source(&self) -> Rc<dyn ScrollSource> {
        Rc::new(self.clone())
    }
}

impl ScrollSource for FakeWindow {
    fn scroll_y(&self) -> f64 {
        self.inner.scroll_y.get()
    }

    fn listen(&self, sink: Rc<dyn Fn(f64)>) -> ListenerGuard {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.attached_total.set(self.inner.attached_total.get() + 1);
        self.inner.listeners.borrow_mut().push((id, sink));
        let weak: Weak<Inner> = Rc::downgrade(&self.inner);
        ListenerGuard::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.listeners.borrow_mut().retain(|(i, _)| *i != id);
            }
        })
    }
}
