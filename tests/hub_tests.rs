// Host-side tests for the shared scroll listener's lifecycle.

mod common;

use common::FakeWindow;
use reveal_core::{RevealOptions, RevealTracker, ScrollDirection, ScrollHub};

#[test]
fn many_trackers_share_one_page_listener() {
    let window = FakeWindow::new();
    let hub = ScrollHub::new(window.as_source());
    assert!(!hub.is_attached());

    let trackers: Vec<_> = (0..25)
        .map(|_| RevealTracker::new(&hub, RevealOptions::default(), |_| {}))
        .collect();

    assert_eq!(window.listener_count(), 1);
    assert_eq!(window.attached_total(), 1);
    assert_eq!(hub.subscriber_count(), 25);
    assert!(hub.is_attached());
    drop(trackers);
}

#[test]
fn last_unsubscribe_releases_listener_and_resets_direction() {
    let window = FakeWindow::new();
    let hub = ScrollHub::new(window.as_source());
    let a = hub.subscribe(|_| {});
    let b = hub.subscribe(|_| {});
    window.scroll_to(40.0);
    assert_eq!(hub.direction(), ScrollDirection::Down);

    drop(a);
    assert_eq!(window.listener_count(), 1);
    assert_eq!(hub.direction(), ScrollDirection::Down);

    drop(b);
    assert_eq!(window.listener_count(), 0);
    assert!(!hub.is_attached());
    assert_eq!(hub.direction(), ScrollDirection::None);
}

#[test]
fn resubscribing_after_teardown_attaches_again() {
    let window = FakeWindow::new();
    let hub = ScrollHub::new(window.as_source());
    drop(hub.subscribe(|_| {}));
    assert_eq!(window.listener_count(), 0);

    let _again = hub.subscribe(|_| {});
    assert_eq!(window.listener_count(), 1);
    assert_eq!(window.attached_total(), 2);
}

#[test]
fn subscription_outliving_hub_drops_quietly() {
    let window = FakeWindow::new();
    let hub = ScrollHub::new(window.as_source());
    let sub = hub.subscribe(|_| {});
    drop(hub);
    // The hub state is gone, and with it the listener guard.
    assert_eq!(window.listener_count(), 0);
    drop(sub);
    window.scroll_to(10.0);
}

#[test]
fn unsubscribing_from_inside_a_callback_is_safe() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let window = FakeWindow::new();
    let hub = ScrollHub::new(window.as_source());
    let slot: Rc<RefCell<Option<reveal_core::Subscription>>> = Rc::new(RefCell::new(None));
    let slot_cb = slot.clone();
    let sub = hub.subscribe(move |_| {
        slot_cb.borrow_mut().take();
    });
    *slot.borrow_mut() = Some(sub);

    window.scroll_to(30.0);
    assert_eq!(hub.subscriber_count(), 0);
    assert_eq!(window.listener_count(), 0);
}
