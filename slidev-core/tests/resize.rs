//! Resize handling while idle, stepping and dragging.

mod common;

use std::time::Duration;

use common::{Harness, assert_close, config, entries, log, record};
use slidev_core::geometry::offset_for;
use slidev_core::{MoveOptions, NavOptions, PointerPosition};

#[test]
fn idle_resize_reapplies_the_offset() {
    let mut h = Harness::new(6, config(2, 1));
    h.slider.go_to(2, MoveOptions::new().instant());
    assert_close(h.offset(), -200.0);

    h.slider.surface_mut().set_container_width(120.0);
    let now = h.now;
    h.slider.on_resize(now);
    assert_close(h.offset(), -120.0);
    assert!(h.slider.next_deadline().is_none());
}

#[test]
fn resize_mid_step_keeps_progress_proportional() {
    let mut h = Harness::new(4, config(1, 1));
    let log = log();

    h.slider.next(NavOptions::new().then(record(&log, "done")));
    h.advance(500);
    assert_close(h.offset(), -50.0);

    h.slider.surface_mut().set_container_width(80.0);
    let now = h.now;
    h.slider.on_resize(now);
    assert_close(h.offset(), -40.0);
    assert_eq!(h.slider.next_deadline(), Some(now + Duration::from_millis(50)));
    assert!(h.slider.is_moving());

    // debounce: the strip holds still until the timer fires
    h.advance(30);
    assert_close(h.offset(), -40.0);
    h.advance(20);
    assert!(h.slider.next_deadline().is_none());
    assert_eq!(h.strip().animation_target(), Some(-80.0));

    // half of the step remains, so half of the duration
    h.advance(490);
    assert!(h.slider.is_moving());
    h.advance(10);
    assert!(!h.slider.is_moving());
    assert_close(h.offset(), -80.0);
    assert_eq!(entries(&log), ["done"]);
    assert_eq!(h.slider.state().position, 1);
}

#[test]
fn repeated_resizes_restart_the_debounce() {
    let mut h = Harness::new(4, config(1, 1));
    h.slider.next(NavOptions::new());
    h.advance(250);

    h.slider.surface_mut().set_container_width(200.0);
    let first = h.now;
    h.slider.on_resize(first);
    h.advance(40);
    h.slider.surface_mut().set_container_width(100.0);
    let second = h.now;
    h.slider.on_resize(second);
    assert_eq!(h.slider.next_deadline(), Some(second + Duration::from_millis(50)));
    assert_close(h.offset(), -25.0);

    h.settle();
    assert_close(h.offset(), -100.0);
}

#[test]
fn resize_while_dragging_rescales_the_gesture() {
    let mut cfg = config(2, 1);
    cfg.draggable = true;
    let mut h = Harness::new(6, cfg);

    h.slider.pointer_down(PointerPosition::new(150.0, 0.0));
    h.slider.pointer_move(PointerPosition::new(90.0, 0.0));
    assert_close(h.offset(), -30.0);

    h.slider.surface_mut().set_container_width(100.0);
    let now = h.now;
    h.slider.on_resize(now);
    // target halves to -50, the displacement still maps to 30px
    assert_close(h.offset(), -30.0);

    h.slider.pointer_up(None);
    h.settle();
    assert_eq!(h.slider.state().position, 1);
    assert_close(h.offset(), -50.0);
}

#[test]
fn resize_during_drag_cancel_heads_for_the_rescaled_origin() {
    let mut cfg = config(2, 1);
    cfg.draggable = true;
    let mut h = Harness::new(6, cfg);
    let log = log();
    h.slider.go_to(1, MoveOptions::new().instant());

    // 20px is well under the 38px threshold
    h.slider.pointer_down(PointerPosition::new(100.0, 0.0));
    h.slider.pointer_move(PointerPosition::new(80.0, 0.0));
    assert_close(h.offset(), -110.0);
    h.slider.next(NavOptions::new().then(record(&log, "queued")));
    h.slider.pointer_up(None);
    assert!(h.slider.is_moving());
    assert_eq!(h.strip().animation_target(), Some(-100.0));

    h.advance(50);
    h.slider.surface_mut().set_container_width(100.0);
    let now = h.now;
    h.slider.on_resize(now);
    let origin = offset_for(1, 50.0);
    assert_eq!(h.strip().animation_target(), Some(origin));
    assert_eq!(h.slider.pending_operations(), 1);

    h.advance(100);
    assert_close(h.offset(), origin);
    // the cancel finished and released the queued step
    assert_eq!(h.slider.pending_operations(), 0);
    assert_eq!(h.slider.state().position, 2);

    h.settle();
    assert_eq!(entries(&log), ["queued"]);
    assert_close(h.offset(), offset_for(2, 50.0));
}
