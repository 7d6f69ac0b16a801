//! Drag-to-navigate state machine.

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{Harness, PANEL, assert_close, config, entries, log, record};
use slidev_core::{Hooks, MoveOptions, NavOptions, PointerPosition, SliderConfig};

/// Three visible panels of 100px over six, one-slide step, 1s transitions.
fn draggable() -> SliderConfig {
    let mut cfg = config(3, 1);
    cfg.draggable = true;
    cfg
}

fn at(x: f32) -> PointerPosition {
    PointerPosition::new(x, 50.0)
}

#[test]
fn drag_past_threshold_commits_next() {
    let mut h = Harness::new(6, draggable());
    // threshold: 300 * 0.2 - 2 = 58px
    h.slider.pointer_down(at(250.0));
    h.slider.pointer_move(at(150.0));
    assert!(h.slider.is_moving());
    // a full-width drag covers one step: 100px of pointer is a third of a panel
    assert_close(h.offset(), -PANEL / 3.0);

    h.slider.pointer_up(None);
    assert_eq!(h.slider.state().position, 1);
    // two thirds of the travel left, so two thirds of the duration
    h.advance(600);
    assert!(h.slider.is_moving());
    h.advance(100);
    assert!(!h.slider.is_moving());
    assert_close(h.offset(), -PANEL);
}

#[test]
fn drag_backwards_commits_prev() {
    let mut h = Harness::new(6, draggable());
    h.slider.go_to(2, MoveOptions::new().instant());

    h.slider.pointer_down(at(100.0));
    h.slider.pointer_move(at(180.0));
    assert_close(h.offset(), -2.0 * PANEL + 80.0 / 3.0);
    h.slider.pointer_up(None);
    h.settle();
    assert_eq!(h.slider.state().position, 1);
}

#[test]
fn short_drag_animates_back_and_releases_the_queue() {
    let mut h = Harness::new(6, draggable());
    let log = log();

    h.slider.pointer_down(at(200.0));
    h.slider.pointer_move(at(170.0));
    // calls made mid-drag wait for the gesture
    h.slider.next(NavOptions::new().then(record(&log, "queued")));
    assert_eq!(h.slider.pending_operations(), 1);

    h.slider.pointer_up(None);
    assert!(h.slider.is_moving(), "cancel animation in flight");
    assert_eq!(h.slider.state().position, 0);
    h.advance(100);
    assert_eq!(h.slider.pending_operations(), 0);

    h.settle();
    assert_eq!(entries(&log), ["queued"]);
    assert_eq!(h.slider.state().position, 1);
}

#[test]
fn drag_is_clamped_short_of_the_target() {
    let mut h = Harness::new(6, draggable());
    h.slider.pointer_down(at(290.0));
    h.slider.pointer_move(at(-900.0));
    assert_close(h.offset(), -PANEL + 0.1);
    h.slider.pointer_up(None);
    h.settle();
    assert_eq!(h.slider.state().position, 1);
}

#[test]
fn dragging_past_the_first_panel_is_damped_then_cancelled() {
    let mut h = Harness::new(6, draggable());
    h.slider.pointer_down(at(10.0));
    h.slider.pointer_move(at(210.0));
    assert_close(h.offset(), 20.0);

    h.slider.pointer_up(None);
    h.settle();
    assert_eq!(h.slider.state().position, 0);
    assert_close(h.offset(), 0.0);
}

#[test]
fn direction_flip_recomputes_the_target() {
    let mut h = Harness::new(6, draggable());
    h.slider.go_to(1, MoveOptions::new().instant());

    h.slider.pointer_down(at(150.0));
    h.slider.pointer_move(at(120.0));
    assert_close(h.offset(), -PANEL - 10.0);
    h.slider.pointer_move(at(210.0));
    assert_close(h.offset(), -PANEL + 20.0);
    h.slider.pointer_up(None);
    h.settle();
    assert_eq!(h.slider.state().position, 0);
}

#[test]
fn click_reports_the_panel_and_does_not_move() {
    let clicks = Rc::new(RefCell::new(Vec::new()));
    let sink = clicks.clone();
    let hooks = Hooks::new().on_slide_click(move |click| sink.borrow_mut().push(click.index));
    let mut h = Harness::with_hooks(6, draggable(), hooks);

    h.slider.pointer_down(at(120.0));
    h.slider.pointer_move(at(116.0));
    h.slider.pointer_up(Some(1));
    h.settle();

    assert_eq!(*clicks.borrow(), [1]);
    assert_eq!(h.slider.state().position, 0);
}

#[test]
fn clicks_are_reported_when_dragging_is_disabled() {
    let clicks = Rc::new(RefCell::new(Vec::new()));
    let sink = clicks.clone();
    let hooks = Hooks::new().on_slide_click(move |click| sink.borrow_mut().push(click.index));
    let mut h = Harness::with_hooks(6, config(3, 1), hooks);

    h.slider.pointer_down(at(120.0));
    h.slider.pointer_move(at(20.0));
    assert!(!h.slider.is_moving());
    assert_close(h.offset(), 0.0);
    h.slider.pointer_up(Some(2));

    h.slider.pointer_down(at(120.0));
    h.slider.pointer_leave(Some(0));
    assert_eq!(*clicks.borrow(), [0]);
}

#[test]
fn pointer_down_is_ignored_while_moving() {
    let mut h = Harness::new(6, draggable());
    h.slider.next(NavOptions::new());
    h.slider.pointer_down(at(200.0));
    h.slider.pointer_move(at(100.0));
    h.slider.pointer_up(None);
    h.settle();
    assert_eq!(h.slider.state().position, 1);
}

#[test]
fn release_next_to_the_origin_settles_at_once() {
    let mut h = Harness::new(6, draggable());
    let log = log();

    h.slider.pointer_down(at(100.0));
    h.slider.pointer_move(at(99.98));
    assert!(h.slider.is_moving());
    h.slider.next(NavOptions::new().instant().then(record(&log, "queued")));

    h.slider.pointer_up(None);
    assert!(!h.slider.is_moving());
    assert!(!h.strip().is_animating());
    // the queued jump ran as soon as the gesture ended
    assert_eq!(entries(&log), ["queued"]);
    assert_eq!(h.slider.state().position, 1);
    assert_close(h.offset(), -PANEL);
}
