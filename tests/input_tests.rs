// Host-side tests for the pure pointer-coordinate mapping.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn identity_when_canvas_fills_viewport() {
    // Full-viewport overlay: rect at origin, backing size equals CSS size
    let pos = client_to_canvas_px(
        Vec2::new(320.0, 240.0),
        Vec2::ZERO,
        Vec2::new(1280.0, 720.0),
        Vec2::new(1280.0, 720.0),
    );
    assert_eq!(pos, Vec2::new(320.0, 240.0));
}

#[test]
fn rect_origin_is_subtracted() {
    let pos = client_to_canvas_px(
        Vec2::new(110.0, 60.0),
        Vec2::new(100.0, 50.0),
        Vec2::new(200.0, 200.0),
        Vec2::new(200.0, 200.0),
    );
    assert_eq!(pos, Vec2::new(10.0, 10.0));
}

#[test]
fn backing_size_mismatch_is_rescaled() {
    let pos = client_to_canvas_px(
        Vec2::new(50.0, 50.0),
        Vec2::ZERO,
        Vec2::new(100.0, 100.0),
        Vec2::new(200.0, 400.0),
    );
    assert_eq!(pos, Vec2::new(100.0, 200.0));
}

#[test]
fn degenerate_rect_maps_to_origin() {
    let pos = client_to_canvas_px(
        Vec2::new(50.0, 50.0),
        Vec2::ZERO,
        Vec2::ZERO,
        Vec2::new(200.0, 200.0),
    );
    assert_eq!(pos, Vec2::ZERO);
}
