// Host-side tests for the ring simulation.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod ripple {
    include!("../src/core/ripple.rs");
}

use glam::Vec2;
use ripple::*;

fn params(max_radius: f32, speed: f32) -> RippleParams {
    RippleParams { max_radius, speed }
}

#[test]
fn new_ripple_starts_at_full_life() {
    let r = Ripple::new(Vec2::new(100.0, 200.0));
    assert_eq!(r.radius, 0.0);
    assert_eq!(r.life, 1.0);
    assert_eq!(r.center, Vec2::new(100.0, 200.0));
    assert!(!r.is_expired());
}

#[test]
fn advance_grows_radius_and_fades_life() {
    let p = params(500.0, 2.0);
    let r = Ripple::new(Vec2::ZERO).advanced(p);
    assert_eq!(r.radius, 2.0);
    assert!((r.life - (1.0 - 2.0 / 500.0)).abs() < 1e-6);
}

#[test]
fn center_is_fixed_across_ticks() {
    let p = params(100.0, 7.0);
    let mut r = Ripple::new(Vec2::new(3.0, 4.0));
    for _ in 0..20 {
        r = r.advanced(p);
        assert_eq!(r.center, Vec2::new(3.0, 4.0));
    }
}

#[test]
fn radius_non_decreasing_and_life_non_increasing() {
    let p = params(500.0, 2.0);
    let mut r = Ripple::new(Vec2::ZERO);
    let mut prev_radius = r.radius;
    let mut prev_life = r.life;
    for _ in 0..300 {
        r = r.advanced(p);
        assert!(r.radius >= prev_radius);
        assert!(r.life <= prev_life);
        assert!((0.0..=1.0).contains(&r.life));
        prev_radius = r.radius;
        prev_life = r.life;
    }
}

#[test]
fn life_pins_to_zero_at_max_radius() {
    let p = params(10.0, 4.0);
    let r = Ripple::new(Vec2::ZERO)
        .advanced(p)
        .advanced(p)
        .advanced(p);
    // radius overshoots max_radius; life must be exactly 0, not negative
    assert_eq!(r.radius, 12.0);
    assert_eq!(r.life, 0.0);
    assert!(r.is_expired());
}

#[test]
fn ripple_expires_after_exactly_max_over_speed_ticks() {
    // max_radius=500, speed=2 -> expired on tick 250
    let mut engine = RippleEngine::new(params(500.0, 2.0));
    engine.spawn(Vec2::new(50.0, 60.0));
    for _ in 0..249 {
        engine.step(|_| {});
        assert_eq!(engine.ripples().len(), 1);
    }
    assert!((engine.ripples()[0].radius - 498.0).abs() < 1e-3);

    let mut last_drawn = None;
    engine.step(|r| last_drawn = Some(*r));
    let last = last_drawn.expect("expiring ripple still drawn on its final tick");
    assert_eq!(last.radius, 500.0);
    assert_eq!(last.life, 0.0);
    assert!(engine.ripples().is_empty());

    // absent on the following tick too: nothing left to draw
    let mut draws = 0;
    engine.step(|_| draws += 1);
    assert_eq!(draws, 0);
}

#[test]
fn ripples_spawned_ten_ticks_apart_coexist() {
    let mut engine = RippleEngine::new(params(500.0, 2.0));
    engine.spawn(Vec2::ZERO);
    for _ in 0..10 {
        engine.step(|_| {});
    }
    engine.spawn(Vec2::new(9.0, 9.0));
    assert_eq!(engine.ripples().len(), 2);
    assert_eq!(engine.ripples()[0].radius, 20.0);
    assert_eq!(engine.ripples()[1].radius, 0.0);
}

#[test]
fn step_draws_every_ripple_and_only_drops_expired() {
    let mut engine = RippleEngine::new(params(6.0, 3.0));
    engine.spawn(Vec2::ZERO); // expires on tick 2
    engine.step(|_| {});
    engine.spawn(Vec2::new(1.0, 1.0));
    engine.spawn(Vec2::new(2.0, 2.0));

    // tick 2: three ripples drawn, the oldest expires
    let mut drawn = Vec::new();
    engine.step(|r| drawn.push(*r));
    assert_eq!(drawn.len(), 3);
    assert_eq!(drawn[0].life, 0.0);
    // removal must not skip the neighbors added after the expiring one
    assert_eq!(engine.ripples().len(), 2);
    assert_eq!(engine.ripples()[0].radius, 3.0);
    assert_eq!(engine.ripples()[1].radius, 3.0);
}

#[test]
fn unbounded_spawning_is_permitted() {
    let mut engine = RippleEngine::new(params(500.0, 2.0));
    for i in 0..1000 {
        engine.spawn(Vec2::new(i as f32, 0.0));
    }
    assert_eq!(engine.ripples().len(), 1000);
    engine.step(|_| {});
    assert_eq!(engine.ripples().len(), 1000);
}

#[test]
fn default_params_match_page_tuning() {
    let p = RippleParams::default();
    assert_eq!(p.max_radius, 500.0);
    assert_eq!(p.speed, 2.0);
}
