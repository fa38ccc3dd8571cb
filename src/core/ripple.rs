// Expanding-ring simulation driven by the page's frame loop.
//
// Everything here is plain arithmetic over `glam` vectors with no platform
// types, so the whole lifecycle can be stepped deterministically in host
// tests without a canvas. Host tests `include!` this file, so it must not
// carry inner attributes or crate-relative imports.

use glam::Vec2;

/// Fixed tuning for the ring animation.
#[derive(Clone, Copy, Debug)]
pub struct RippleParams {
    /// Radius (px) at which a ring is fully expanded and fully transparent.
    pub max_radius: f32,
    /// Radius growth per animation tick (px).
    pub speed: f32,
}

impl Default for RippleParams {
    fn default() -> Self {
        Self {
            max_radius: 500.0,
            speed: 2.0,
        }
    }
}

/// One expanding ring, anchored where the user clicked.
///
/// `life` is a pure function of `radius`: it fades linearly from 1 to 0 as
/// the ring grows and pins to 0 once `radius` reaches `max_radius`. The
/// renderer maps it directly to stroke opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub center: Vec2,
    pub radius: f32,
    pub life: f32,
}

impl Ripple {
    pub fn new(center: Vec2) -> Self {
        Self {
            center,
            radius: 0.0,
            life: 1.0,
        }
    }

    /// One tick of growth. Returns the grown ring rather than mutating, so
    /// the engine can rebuild its collection as a filter step.
    #[must_use]
    pub fn advanced(self, params: RippleParams) -> Self {
        let radius = self.radius + params.speed;
        let life = if radius < params.max_radius {
            1.0 - radius / params.max_radius
        } else {
            0.0
        };
        Self {
            radius,
            life,
            ..self
        }
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.life <= 0.0
    }
}

/// Owner of the live ring collection.
///
/// Rings are appended on click and advance once per frame; an expired ring
/// is drawn at zero life and dropped in the same tick. There is no cap on
/// concurrent rings since each one self-terminates after
/// `max_radius / speed` ticks.
pub struct RippleEngine {
    params: RippleParams,
    ripples: Vec<Ripple>,
}

impl RippleEngine {
    pub fn new(params: RippleParams) -> Self {
        Self {
            params,
            ripples: Vec::new(),
        }
    }

    /// Start a new ring at the clicked point (canvas px).
    pub fn spawn(&mut self, center: Vec2) {
        self.ripples.push(Ripple::new(center));
    }

    /// Advance every ring one tick, handing each advanced ring to `draw`,
    /// then keep only the unexpired ones. A fresh retained vector is built
    /// each tick so removal can never skip a neighbor mid-iteration.
    pub fn step<F: FnMut(&Ripple)>(&mut self, mut draw: F) {
        let mut retained = Vec::with_capacity(self.ripples.len());
        for ripple in self.ripples.drain(..) {
            let ripple = ripple.advanced(self.params);
            draw(&ripple);
            if !ripple.is_expired() {
                retained.push(ripple);
            }
        }
        self.ripples = retained;
    }

    #[inline]
    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    #[inline]
    pub fn params(&self) -> RippleParams {
        self.params
    }
}
