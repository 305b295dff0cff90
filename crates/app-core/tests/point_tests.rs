// Host-side tests for the per-point state machine.

use app_core::constants::{
    BASE_RADIUS, CLICK_RADIUS, CLICK_RESET_MS, HOVER_RADIUS, HOVER_TOLERANCE,
};
use app_core::point::{Point, PointState};
use glam::Vec2;

const POS: Vec2 = Vec2::new(100.0, 100.0);

/// A point that has finished its reveal growth.
fn settled_point() -> Point {
    let mut p = Point::new(1, POS);
    for _ in 0..200 {
        p.grow_in();
    }
    assert!(!p.is_revealing());
    p
}

#[test]
fn new_point_starts_hidden_and_normal() {
    let p = Point::new(7, POS);
    assert_eq!(p.state, PointState::Normal);
    assert_eq!(p.current_radius, 0.0);
    assert_eq!(p.current_target_radius, BASE_RADIUS);
    assert!(p.is_revealing());
    assert!(!p.has_pending_reset());
}

#[test]
fn grow_in_reaches_base_radius_without_overshoot() {
    let mut p = Point::new(1, POS);
    let mut prev = p.current_radius;
    for _ in 0..200 {
        p.grow_in();
        assert!(p.current_radius >= prev, "growth must be monotonic");
        assert!(p.current_radius <= BASE_RADIUS, "growth must not overshoot");
        prev = p.current_radius;
    }
    assert_eq!(p.current_radius, BASE_RADIUS);
    assert!(!p.is_revealing());

    // Further growth calls are inert once the reveal is done.
    p.grow_in();
    assert_eq!(p.current_radius, BASE_RADIUS);
}

#[test]
fn radius_tracks_up_to_the_hover_target_and_settles() {
    let mut p = settled_point();
    p.update_hover(POS);
    assert_eq!(p.state, PointState::Hovered);
    for _ in 0..100 {
        p.track_radius();
        assert!(p.current_radius <= HOVER_RADIUS);
    }
    assert_eq!(p.current_radius, HOVER_RADIUS);
}

#[test]
fn radius_tracks_back_down_after_hover_exit() {
    let mut p = settled_point();
    p.update_hover(POS);
    for _ in 0..100 {
        p.track_radius();
    }
    p.update_hover(Vec2::new(500.0, 500.0));
    assert_eq!(p.state, PointState::Normal);
    for _ in 0..100 {
        p.track_radius();
        assert!(p.current_radius >= BASE_RADIUS);
    }
    assert_eq!(p.current_radius, BASE_RADIUS);
}

#[test]
fn hover_at_the_exact_center_is_reflexive() {
    let mut p = settled_point();
    p.update_hover(POS);
    assert_eq!(p.state, PointState::Hovered);
}

#[test]
fn hover_threshold_includes_the_tolerance_ring() {
    let mut p = settled_point();
    let threshold = p.current_target_radius + HOVER_TOLERANCE;

    p.update_hover(POS + Vec2::new(threshold, 0.0));
    assert_eq!(p.state, PointState::Hovered, "boundary is inclusive");

    let mut q = settled_point();
    q.update_hover(POS + Vec2::new(threshold + 0.5, 0.0));
    assert_eq!(q.state, PointState::Normal);
}

#[test]
fn clicked_points_ignore_hover_until_reset() {
    let mut p = settled_point();
    p.press(1_000.0);
    p.update_hover(POS);
    assert_eq!(p.state, PointState::Clicked);
    p.update_hover(Vec2::new(500.0, 500.0));
    assert_eq!(p.state, PointState::Clicked);
    assert_eq!(p.current_target_radius, CLICK_RADIUS);
}

#[test]
fn press_sets_the_click_target_and_schedules_a_reset() {
    let mut p = settled_point();
    p.press(1_000.0);
    assert_eq!(p.state, PointState::Clicked);
    assert_eq!(p.current_target_radius, CLICK_RADIUS);
    assert!(p.has_pending_reset());
}

#[test]
fn reset_fires_only_after_the_deadline() {
    let mut p = settled_point();
    p.press(1_000.0);
    assert!(!p.expire_reset(1_000.0 + CLICK_RESET_MS - 1.0));
    assert_eq!(p.state, PointState::Clicked);

    assert!(p.expire_reset(1_000.0 + CLICK_RESET_MS));
    assert_eq!(p.state, PointState::Normal);
    assert_eq!(p.current_target_radius, BASE_RADIUS);
    assert!(!p.has_pending_reset());
}

#[test]
fn a_later_press_replaces_the_pending_reset() {
    let mut p = settled_point();
    p.press(0.0);
    p.press(200.0);
    // The first deadline (300 ms) must not fire any more.
    assert!(!p.expire_reset(350.0));
    assert_eq!(p.state, PointState::Clicked);
    assert!(p.expire_reset(200.0 + CLICK_RESET_MS));
    assert_eq!(p.state, PointState::Normal);
}

#[test]
fn clear_hover_rests_normal_and_hovered_but_spares_clicked() {
    let mut hovered = settled_point();
    hovered.update_hover(POS);
    hovered.clear_hover();
    assert_eq!(hovered.state, PointState::Normal);
    assert_eq!(hovered.current_target_radius, BASE_RADIUS);

    let mut clicked = settled_point();
    clicked.press(0.0);
    clicked.clear_hover();
    assert_eq!(clicked.state, PointState::Clicked);
    assert_eq!(clicked.current_target_radius, CLICK_RADIUS);
}

#[test]
fn is_settled_tracks_the_full_lifecycle() {
    let mut p = Point::new(1, POS);
    assert!(!p.is_settled(), "still revealing");

    for _ in 0..200 {
        p.grow_in();
    }
    assert!(p.is_settled());

    p.press(0.0);
    assert!(!p.is_settled(), "clicked and pending reset");

    p.expire_reset(CLICK_RESET_MS);
    assert!(!p.is_settled(), "radius still above base");
    for _ in 0..100 {
        p.track_radius();
    }
    assert!(p.is_settled());
}

#[test]
fn click_hit_test_uses_the_current_target_radius() {
    let mut p = settled_point();
    assert!(p.hit(POS));
    assert!(p.hit(POS + Vec2::new(BASE_RADIUS, 0.0)));
    assert!(!p.hit(POS + Vec2::new(BASE_RADIUS + 0.5, 0.0)));

    // Hovering widens the clickable circle to the hover target.
    p.update_hover(POS);
    assert!(p.hit(POS + Vec2::new(HOVER_RADIUS, 0.0)));
}
