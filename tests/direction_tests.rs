// Host-side tests for scroll direction inference and the shared hub.

mod common;

use common::FakeWindow;
use reveal_core::{ScrollCursor, ScrollDirection, ScrollHub};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn cursor_reports_down_up_and_keeps_direction_on_equal() {
    let mut cursor = ScrollCursor::new(100.0);
    assert_eq!(cursor.direction(), ScrollDirection::None);

    assert_eq!(cursor.record(150.0), Some(ScrollDirection::Down));
    assert_eq!(cursor.record(150.0), None);
    assert_eq!(cursor.direction(), ScrollDirection::Down);

    assert_eq!(cursor.record(90.0), Some(ScrollDirection::Up));
    assert_eq!(cursor.record(10.0), None); // still up
    assert_eq!(cursor.direction(), ScrollDirection::Up);
    assert_eq!(cursor.last_y(), 10.0);
}

#[test]
fn cursor_equal_first_sample_leaves_none() {
    let mut cursor = ScrollCursor::new(0.0);
    assert_eq!(cursor.record(0.0), None);
    assert_eq!(cursor.direction(), ScrollDirection::None);
}

#[test]
fn cursor_ignores_nan_positions() {
    let mut cursor = ScrollCursor::new(10.0);
    cursor.record(f64::NAN);
    assert_eq!(cursor.last_y(), 10.0);
    assert_eq!(cursor.record(20.0), Some(ScrollDirection::Down));
}

#[test]
fn hub_direction_follows_latest_delta() {
    let window = FakeWindow::at(200.0);
    let hub = ScrollHub::new(window.as_source());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_cb = seen.clone();
    let _sub = hub.subscribe(move |d| seen_cb.borrow_mut().push(d));

    window.scroll_to(250.0);
    assert_eq!(hub.direction(), ScrollDirection::Down);
    window.scroll_to(250.0);
    assert_eq!(hub.direction(), ScrollDirection::Down);
    window.scroll_to(100.0);
    assert_eq!(hub.direction(), ScrollDirection::Up);
    window.scroll_to(120.0);
    assert_eq!(hub.direction(), ScrollDirection::Down);

    // Callbacks only fire on changes.
    assert_eq!(
        *seen.borrow(),
        vec![
            ScrollDirection::Down,
            ScrollDirection::Up,
            ScrollDirection::Down
        ]
    );
}

#[test]
fn hub_cursor_starts_from_position_at_first_subscription() {
    let window = FakeWindow::at(0.0);
    let hub = ScrollHub::new(window.as_source());
    window.scroll_to(500.0); // nobody listening yet
    let _sub = hub.subscribe(|_| {});
    window.scroll_to(400.0);
    assert_eq!(hub.direction(), ScrollDirection::Up);
}

#[test]
fn direction_display_matches_wire_names() {
    assert_eq!(ScrollDirection::None.to_string(), "none");
    assert_eq!(ScrollDirection::Up.to_string(), "up");
    assert_eq!(ScrollDirection::Down.as_str(), "down");
    assert_eq!(ScrollDirection::default(), ScrollDirection::None);
}
