//! Navigation and queue ordering through the public API.

mod common;

use common::{Harness, PANEL, assert_close, config, entries, log, record};
use slidev_core::{Hooks, MoveOptions, NavOptions};

#[test]
fn calls_while_moving_run_in_submission_order() {
    let mut h = Harness::new(8, config(1, 1));
    let log = log();

    h.slider
        .next(NavOptions::new().then(record(&log, "a")))
        .next(NavOptions::new().then(record(&log, "b")))
        .prev(NavOptions::new().then(record(&log, "c")));
    assert!(h.slider.is_moving());
    assert_eq!(h.slider.pending_operations(), 2);

    h.settle();
    assert_eq!(entries(&log), ["a", "b", "c"]);
    assert_eq!(h.slider.state().position, 1);
}

#[test]
fn callback_submissions_run_before_earlier_queue() {
    let mut h = Harness::new(10, config(1, 1));
    let log = log();

    let inner = log.clone();
    h.slider.next(NavOptions::new().then(move |slider, _| {
        inner.borrow_mut().push("a".into());
        slider.next(NavOptions::new().then(record(&inner, "d")));
    }));
    h.slider.next(NavOptions::new().then(record(&log, "b")));
    h.slider.next(NavOptions::new().then(record(&log, "c")));

    h.settle();
    assert_eq!(entries(&log), ["a", "d", "b", "c"]);
    assert_eq!(h.slider.state().position, 4);
}

#[test]
fn instant_moves_complete_synchronously() {
    let mut h = Harness::new(6, config(2, 1));
    let log = log();

    h.slider.next(NavOptions::new().instant().then(record(&log, "done")));
    assert!(!h.slider.is_moving());
    assert_eq!(entries(&log), ["done"]);
    assert_eq!(h.slider.state().position, 1);
    assert_close(h.offset(), -PANEL);
}

#[test]
fn forward_step_is_clamped_to_available() {
    // five panels, three visible, one slide beyond the frame
    let mut h = Harness::new(5, config(3, 1));
    h.slider.go_to(1, MoveOptions::new().instant());
    assert_eq!(h.slider.state().slides_after_frame, 1);

    h.slider.next(NavOptions::new().step(5));
    h.settle();
    let state = h.slider.state();
    assert_eq!(state.position, 2);
    assert_eq!(state.slides_after_frame, 0);
    assert_eq!(state.last_index, 4);
}

#[test]
fn go_to_past_the_end_stops_at_last_full_frame() {
    let mut h = Harness::new(6, config(3, 1));
    h.slider.go_to(4, MoveOptions::new());
    h.settle();
    assert_eq!(h.slider.state().position, 3);
    assert_eq!(h.slider.state().slides_after_frame, 0);
    assert_close(h.offset(), -3.0 * PANEL);
    assert_eq!(h.first_visible(), 'd');
}

#[test]
fn blocked_step_is_a_no_op_that_still_calls_back() {
    let mut h = Harness::new(4, config(2, 1));
    let log = log();
    h.slider.prev(NavOptions::new().then(record(&log, "prev")));
    assert!(!h.slider.is_moving(), "zero step must not wait for a transition");
    assert_eq!(entries(&log), ["prev"]);
    assert_eq!(h.slider.state().position, 0);
    assert_eq!(h.strip().completions(), 0);
}

#[test]
fn go_to_measures_distance_when_it_executes() {
    let mut h = Harness::new(8, config(1, 1));
    h.slider.next(NavOptions::new().step(3));
    // queued behind a move that ends at 3
    h.slider.go_to(1, MoveOptions::new());
    h.settle();
    assert_eq!(h.slider.state().position, 1);
}

#[test]
fn move_end_hook_fires_for_animated_steps_only() {
    let log = log();
    let hook_log = log.clone();
    let hooks = Hooks::new().on_move_end(move || hook_log.borrow_mut().push("end".into()));
    let mut h = Harness::with_hooks(6, config(1, 1), hooks);

    h.slider.next(NavOptions::new().instant());
    assert!(entries(&log).is_empty());

    h.slider.next(NavOptions::new().then(record(&log, "cb")));
    h.settle();
    assert_eq!(entries(&log), ["end", "cb"]);
}

#[test]
fn animated_step_follows_configured_duration() {
    let mut cfg = config(1, 1);
    cfg.transition_duration_ms = 400;
    let mut h = Harness::new(3, cfg);

    h.slider.next(NavOptions::new());
    h.advance(200);
    assert_close(h.offset(), -PANEL / 2.0);
    assert!(h.slider.is_moving());
    h.advance(200);
    assert!(!h.slider.is_moving());
    assert_close(h.offset(), -PANEL);
}

#[test]
fn zero_length_transition_completes_without_surface_notification() {
    let mut cfg = config(1, 1);
    cfg.transition_duration_ms = 0;
    let log = log();
    let mut h = Harness::new(3, cfg);

    h.slider.next(NavOptions::new().then(record(&log, "done")));
    assert!(!h.slider.is_moving());
    assert_eq!(entries(&log), ["done"]);
    assert_eq!(h.slider.state().position, 1);
}

#[test]
fn oversized_requests_clamp_in_their_own_direction() {
    // eight panels, three visible: the frame can reach position 5
    let mut h = Harness::new(8, config(3, 1));
    h.slider.go_to(2, MoveOptions::new().instant());

    h.slider.next(NavOptions::new().step(usize::MAX).instant());
    assert_eq!(h.slider.state().position, 5);

    h.slider.prev(NavOptions::new().step(usize::MAX).instant());
    assert_eq!(h.slider.state().position, 0);

    h.slider.next(NavOptions::new().step(usize::MAX / 2 + 1).instant());
    assert_eq!(h.slider.state().position, 5);
    assert_close(h.offset(), -5.0 * PANEL);
}

#[test]
fn go_to_an_unreachable_index_stops_at_the_end() {
    let mut h = Harness::new(8, config(3, 1));
    h.slider.go_to(2, MoveOptions::new().instant());
    h.slider.go_to(usize::MAX, MoveOptions::new().instant());
    assert_eq!(h.slider.state().position, 5);
    assert_eq!(h.slider.state().slides_after_frame, 0);
}
