// File: crates/chart-engine/tests/viewport.rs
// Purpose: Viewport state machine transitions, wheel-zoom arithmetic, and
// clamping guarantees.

use chart_engine::{ViewPhase, Viewport, ViewportController};

const N: usize = 1000;

#[test]
fn starts_idle_over_full_range() {
    let view = ViewportController::new(N);
    assert_eq!(view.phase(), ViewPhase::Idle);
    assert_eq!(view.viewport(), Viewport { left: 0, right: N - 1 });
}

#[test]
fn drag_commits_ordered_range() {
    let mut view = ViewportController::new(N);
    view.begin_select(50);
    assert_eq!(view.phase(), ViewPhase::Selecting);
    view.update_select(10);
    view.commit_select();
    assert_eq!(view.viewport(), Viewport { left: 10, right: 50 });
    assert_eq!(view.phase(), ViewPhase::Zoomed);
}

#[test]
fn degenerate_selection_keeps_prior_viewport() {
    let mut view = ViewportController::new(N);
    view.begin_select(100);
    view.update_select(300);
    view.commit_select();
    let zoomed = view.viewport();

    // Same anchor and draft: no-op zoom.
    view.begin_select(150);
    view.update_select(150);
    view.commit_select();
    assert_eq!(view.viewport(), zoomed);
    assert_eq!(view.phase(), ViewPhase::Zoomed);

    // No draft at all: no-op as well.
    view.begin_select(150);
    view.commit_select();
    assert_eq!(view.viewport(), zoomed);
}

#[test]
fn orphan_select_events_are_no_ops() {
    let mut view = ViewportController::new(N);
    view.update_select(123);
    view.commit_select();
    assert_eq!(view.phase(), ViewPhase::Idle);
    assert_eq!(view.viewport(), Viewport::full(N));
}

#[test]
fn cancel_reverts_to_prior_viewport() {
    let mut view = ViewportController::new(N);
    view.begin_select(5);
    view.update_select(500);
    view.cancel_select();
    assert_eq!(view.phase(), ViewPhase::Idle);
    assert_eq!(view.viewport(), Viewport::full(N));
}

#[test]
fn new_gesture_replaces_pending_one() {
    let mut view = ViewportController::new(N);
    view.begin_select(10);
    view.update_select(700);
    view.begin_select(200);
    view.update_select(250);
    view.commit_select();
    assert_eq!(view.viewport(), Viewport { left: 200, right: 250 });
}

#[test]
fn wheel_zoom_in_shrinks_around_midpoint() {
    let mut view = ViewportController::new(N);
    view.wheel_zoom(-1.0, None);
    // range 999 * 0.9 rounds to 899, centered on 499.
    assert_eq!(view.viewport(), Viewport { left: 50, right: 949 });
    assert_eq!(view.phase(), ViewPhase::Zoomed);
}

#[test]
fn wheel_zoom_out_grows_range() {
    let mut view = ViewportController::new(N);
    view.wheel_zoom(-1.0, None);
    let before = view.viewport().count();
    view.wheel_zoom(1.0, None);
    assert!(view.viewport().count() > before);
}

#[test]
fn wheel_zoom_respects_minimum_range() {
    let mut view = ViewportController::new(N);
    view.begin_select(100);
    view.update_select(104);
    view.commit_select();
    view.wheel_zoom(-1.0, None);
    let vp = view.viewport();
    assert!(vp.right - vp.left >= 10);
}

#[test]
fn wheel_zoom_never_leaves_bounds() {
    let mut view = ViewportController::new(N);
    view.begin_select(995);
    view.update_select(999);
    view.commit_select();
    for _ in 0..20 {
        view.wheel_zoom(1.0, None);
        let vp = view.viewport();
        assert!(vp.right <= N - 1);
        assert!(vp.left <= vp.right);
    }
}

#[test]
fn zoom_out_at_right_edge_shifts_left_bound() {
    let mut view = ViewportController::new(N);
    view.begin_select(995);
    view.update_select(999);
    view.commit_select();
    view.wheel_zoom(1.0, None);
    // Clamped against the right edge; the width of 10 survives by shifting
    // the left bound.
    assert_eq!(view.viewport(), Viewport { left: 989, right: 999 });
}

#[test]
fn zooming_all_the_way_out_returns_to_idle() {
    let mut view = ViewportController::new(15);
    view.begin_select(2);
    view.update_select(12);
    view.commit_select();
    for _ in 0..10 {
        view.wheel_zoom(1.0, None);
    }
    assert_eq!(view.phase(), ViewPhase::Idle);
    assert_eq!(view.viewport(), Viewport { left: 0, right: 14 });
}

#[test]
fn wheel_zoom_accepts_explicit_center() {
    let mut view = ViewportController::new(N);
    view.wheel_zoom(-1.0, Some(100));
    assert_eq!(view.viewport(), Viewport { left: 0, right: 899 });
}

#[test]
fn wheel_cancels_pending_selection() {
    let mut view = ViewportController::new(N);
    view.begin_select(10);
    view.wheel_zoom(-1.0, None);
    assert_ne!(view.phase(), ViewPhase::Selecting);
    assert_eq!(view.pending_selection(), None);
}

#[test]
fn reset_always_restores_full_range() {
    let mut view = ViewportController::new(N);
    view.wheel_zoom(-1.0, None);
    view.begin_select(5);
    view.reset();
    assert_eq!(view.phase(), ViewPhase::Idle);
    assert_eq!(view.viewport(), Viewport::full(N));
}

#[test]
fn out_of_range_indices_are_clamped() {
    let mut view = ViewportController::new(N);
    view.begin_select(5000);
    view.update_select(100);
    view.commit_select();
    assert_eq!(view.viewport(), Viewport { left: 100, right: N - 1 });
}

#[test]
fn empty_series_tolerates_every_operation() {
    let mut view = ViewportController::new(0);
    view.begin_select(3);
    view.update_select(7);
    view.commit_select();
    view.wheel_zoom(1.0, None);
    view.wheel_zoom(-1.0, Some(4));
    view.reset();
    assert_eq!(view.viewport(), Viewport { left: 0, right: 0 });
}
