// Host-side tests for zoom clamping and pan math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod view {
    include!("../src/view.rs");
}

use glam::Vec2;
use view::*;

#[test]
fn zoom_clamps_to_range() {
    assert_eq!(clamp_zoom(0.0), 0.2);
    assert_eq!(clamp_zoom(0.2), 0.2);
    assert_eq!(clamp_zoom(1.0), 1.0);
    assert_eq!(clamp_zoom(5.0), 5.0);
    assert_eq!(clamp_zoom(50.0), 5.0);
    assert_eq!(clamp_zoom(-3.0), 0.2);
}

#[test]
fn zoom_is_monotonic_within_range() {
    let mut prev = clamp_zoom(0.1);
    let mut z = 0.1_f32;
    while z < 5.2 {
        let cur = clamp_zoom(z);
        assert!(cur >= prev, "zoom not monotonic at {z}");
        prev = cur;
        z += 0.05;
    }
}

#[test]
fn zoom_steps_and_reset() {
    let mut view = ViewState::default();
    assert_eq!(view.scale, 1.0);
    view.zoom_in();
    assert!((view.scale - 1.05).abs() < 1e-6);
    view.zoom_out();
    view.zoom_out();
    assert!((view.scale - 0.95).abs() < 1e-6);
    view.set_zoom(9.0);
    assert_eq!(view.scale, 5.0);
    view.reset();
    assert_eq!(view.scale, 1.0);
}

#[test]
fn zoom_never_escapes_bounds_through_steps() {
    let mut view = ViewState::default();
    for _ in 0..200 {
        view.zoom_out();
    }
    assert_eq!(view.scale, 0.2);
    for _ in 0..200 {
        view.zoom_in();
    }
    assert_eq!(view.scale, 5.0);
}

#[test]
fn wheel_zoom_negates_and_scales_delta() {
    // scrolling up (negative deltaY) zooms in
    let z = wheel_zoom(1.0, -100.0);
    assert!((z - 2.0).abs() < 1e-6);
    let z = wheel_zoom(1.0, 50.0);
    assert!((z - 0.5).abs() < 1e-6);
    // and still clamps
    assert_eq!(wheel_zoom(4.9, -1000.0), 5.0);
    assert_eq!(wheel_zoom(0.3, 1000.0), 0.2);
}

#[test]
fn pan_scroll_moves_against_the_pointer() {
    let start = Vec2::new(400.0, 300.0);
    // dragging the pointer right/down scrolls left/up
    assert_eq!(pan_scroll(start, Vec2::new(120.0, 80.0)), Vec2::new(280.0, 220.0));
    assert_eq!(pan_scroll(start, Vec2::new(-50.0, 0.0)), Vec2::new(450.0, 300.0));
    assert_eq!(pan_scroll(start, Vec2::ZERO), start);
}
