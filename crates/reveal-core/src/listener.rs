use std::fmt;
use std::rc::Rc;

/// Handle for an attached listener or observer. Dropping it detaches.
#[must_use = "dropping the guard detaches the listener immediately"]
pub struct ListenerGuard {
    release: Option<Box<dyn FnOnce()>>,
}

impl ListenerGuard {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Guard with nothing to release, for sources that cannot stop delivery.
    pub fn detached() -> Self {
        Self { release: None }
    }

    pub fn release(mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("armed", &self.release.is_some())
            .finish()
    }
}

/// Platform seam for page scroll events.
pub trait ScrollSource {
    /// Current vertical scroll offset of the page.
    fn scroll_y(&self) -> f64;

    /// Deliver the scroll offset to `sink` on every scroll event until the
    /// returned guard is dropped.
    fn listen(&self, sink: Rc<dyn Fn(f64)>) -> ListenerGuard;
}
