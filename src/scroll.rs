use crate::dom;
use reveal_core::{ListenerGuard, ScrollHub, ScrollSource};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `ScrollSource` backed by passive `scroll` listeners on the window.
pub struct WindowScroll {
    window: web::Window,
}

impl WindowScroll {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

impl ScrollSource for WindowScroll {
    fn scroll_y(&self) -> f64 {
        dom::scroll_y(&self.window)
    }

    fn listen(&self, sink: Rc<dyn Fn(f64)>) -> ListenerGuard {
        let window = self.window.clone();
        let closure = Closure::wrap(Box::new(move || {
            sink(dom::scroll_y(&window));
        }) as Box<dyn FnMut()>);

        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(true);
        if let Err(e) = self
            .window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                closure.as_ref().unchecked_ref(),
                &opts,
            )
        {
            log::warn!("[scroll] could not add scroll listener: {:?}", e);
            return ListenerGuard::detached();
        }

        let target = self.window.clone();
        ListenerGuard::new(move || {
            _ = target
                .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
            drop(closure);
        })
    }
}

thread_local! {
    static SOURCE: RefCell<Option<Rc<WindowScroll>>> = const { RefCell::new(None) };
    static HUB: RefCell<Option<ScrollHub>> = const { RefCell::new(None) };
}

/// The page's window scroll source, created on first use.
pub fn window_source() -> Option<Rc<WindowScroll>> {
    SOURCE.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            *slot = web::window().map(|w| Rc::new(WindowScroll::new(w)));
        }
        slot.clone()
    })
}

/// The page-wide direction hub. It only holds a window listener while at
/// least one reveal tracker is subscribed.
pub fn shared_hub() -> Option<ScrollHub> {
    HUB.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            *slot = window_source().map(|source| ScrollHub::new(source as Rc<dyn ScrollSource>));
        }
        slot.clone()
    })
}
