//! Page-wide scroll direction service.
//!
//! One `ScrollHub` exists per page. It attaches a single listener to its
//! `ScrollSource` when the first subscriber arrives and releases it when
//! the last `Subscription` is dropped, so any number of trackers share one
//! scroll handler.

use crate::direction::{ScrollCursor, ScrollDirection};
use crate::listener::{ListenerGuard, ScrollSource};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

type DirectionCallback = Rc<dyn Fn(ScrollDirection)>;

struct HubState {
    source: Rc<dyn ScrollSource>,
    cursor: ScrollCursor,
    listener: Option<ListenerGuard>,
    subscribers: Vec<(u64, DirectionCallback)>,
    next_id: u64,
}

#[derive(Clone)]
pub struct ScrollHub {
    state: Rc<RefCell<HubState>>,
}

impl ScrollHub {
    pub fn new(source: Rc<dyn ScrollSource>) -> Self {
        Self {
            state: Rc::new(RefCell::new(HubState {
                source,
                cursor: ScrollCursor::default(),
                listener: None,
                subscribers: Vec::new(),
                next_id: 0,
            })),
        }
    }

    pub fn direction(&self) -> ScrollDirection {
        self.state.borrow().cursor.direction()
    }

    pub fn subscriber_count(&self) -> usize {
        self.state.borrow().subscribers.len()
    }

    /// Whether the platform scroll listener is currently attached.
    pub fn is_attached(&self) -> bool {
        self.state.borrow().listener.is_some()
    }

    /// Register `on_direction` to run whenever the page direction changes.
    pub fn subscribe(&self, on_direction: impl Fn(ScrollDirection) + 'static) -> Subscription {
        let callback: DirectionCallback = Rc::new(on_direction);
        let (id, attach_to) = {
            let mut st = self.state.borrow_mut();
            let id = st.next_id;
            st.next_id += 1;
            st.subscribers.push((id, callback));
            let attach_to = if st.listener.is_none() {
                let source = st.source.clone();
                st.cursor = ScrollCursor::new(source.scroll_y());
                Some(source)
            } else {
                None
            };
            (id, attach_to)
        };

        if let Some(source) = attach_to {
            let weak = Rc::downgrade(&self.state);
            let guard = source.listen(Rc::new(move |y: f64| dispatch(&weak, y)));
            let mut st = self.state.borrow_mut();
            // A subscriber may have come and gone while the source attached.
            if st.subscribers.is_empty() {
                drop(st);
                drop(guard);
            } else {
                st.listener = Some(guard);
                log::debug!("[scroll-hub] attached page scroll listener");
            }
        }

        Subscription {
            hub: Rc::downgrade(&self.state),
            id,
        }
    }
}

fn dispatch(state: &Weak<RefCell<HubState>>, y: f64) {
    let Some(state) = state.upgrade() else {
        return;
    };
    let (direction, callbacks) = {
        let mut st = state.borrow_mut();
        if st.listener.is_none() {
            return;
        }
        match st.cursor.record(y) {
            Some(direction) => {
                let callbacks: SmallVec<[DirectionCallback; 8]> =
                    st.subscribers.iter().map(|(_, cb)| cb.clone()).collect();
                (direction, callbacks)
            }
            None => return,
        }
    };
    log::trace!("[scroll-hub] direction -> {}", direction);
    for cb in callbacks {
        cb(direction);
    }
}

/// Keeps one hub callback registered. Dropping it unsubscribes and, for
/// the last subscriber, detaches the page listener and resets direction.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct Subscription {
    hub: Weak<RefCell<HubState>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(state) = self.hub.upgrade() else {
            return;
        };
        let released = {
            let mut st = state.borrow_mut();
            st.subscribers.retain(|(id, _)| *id != self.id);
            if st.subscribers.is_empty() {
                st.cursor = ScrollCursor::default();
                st.listener.take()
            } else {
                None
            }
        };
        if let Some(guard) = released {
            drop(guard);
            log::debug!("[scroll-hub] released page scroll listener");
        }
    }
}
