//! Responsive rescaling
//!
//! When the canvas changes size, every simulation-space quantity is scaled
//! proportionally so the scene keeps its relative layout. Each quantity is
//! tagged with the axis it scales along; sizes that have no single axis
//! (radius) scale by the combined factor.

use glam::Vec2;

use super::state::SimState;

/// Scaling tag for a simulation quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    /// Scales by `(new.x + new.y) / (old.x + old.y)`
    Uniform,
}

/// Rescale a single quantity from the old viewport to the new one
#[inline]
pub fn scaled(value: f32, axis: Axis, old: Vec2, new: Vec2) -> f32 {
    match axis {
        Axis::X => value * new.x / old.x,
        Axis::Y => value * new.y / old.y,
        Axis::Uniform => value * (new.x + new.y) / (old.x + old.y),
    }
}

/// Rescale the whole state to a new viewport size.
///
/// Called once per frame before the step; a no-op when the size is
/// unchanged. Line width intentionally scales along Y, matching the
/// observed behavior of the original toy.
///
/// Panics if the current viewport has a zero dimension: there is no
/// meaningful scale factor out of a degenerate viewport.
pub fn rescale(state: &mut SimState, new_viewport: Vec2) {
    let old = state.config.viewport;
    assert!(
        old.x > 0.0 && old.y > 0.0,
        "cannot rescale from a degenerate viewport {old:?}"
    );

    if old == new_viewport {
        return;
    }

    for circle in &mut state.circles {
        circle.pos.x = scaled(circle.pos.x, Axis::X, old, new_viewport);
        circle.pos.y = scaled(circle.pos.y, Axis::Y, old, new_viewport);
        circle.vel.x = scaled(circle.vel.x, Axis::X, old, new_viewport);
        circle.vel.y = scaled(circle.vel.y, Axis::Y, old, new_viewport);
        circle.radius = scaled(circle.radius, Axis::Uniform, old, new_viewport);
        circle.line_width = scaled(circle.line_width, Axis::Y, old, new_viewport);
    }

    for point in [
        &mut state.area.p1,
        &mut state.area.p2,
        &mut state.area.p3,
        &mut state.area.p4,
    ] {
        point.x = scaled(point.x, Axis::X, old, new_viewport);
        point.y = scaled(point.y, Axis::Y, old, new_viewport);
    }

    state.config.viewport = new_viewport;
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_scaled_factors() {
        let old = Vec2::new(100.0, 200.0);
        let new = Vec2::new(200.0, 100.0);

        assert_eq!(scaled(50.0, Axis::X, old, new), 100.0);
        assert_eq!(scaled(50.0, Axis::Y, old, new), 25.0);
        // combined extent is unchanged (300 -> 300)
        assert_eq!(scaled(50.0, Axis::Uniform, old, new), 50.0);
    }

    #[test]
    fn test_rescale_preserves_relative_layout() {
        let mut state = SimState::new(Vec2::new(400.0, 400.0));
        state.circles[0].vel = Vec2::new(3.0, -2.0);

        rescale(&mut state, Vec2::new(800.0, 800.0));

        assert_eq!(state.config.viewport, Vec2::new(800.0, 800.0));
        assert_eq!(state.circles[0].pos, Vec2::new(400.0, 400.0));
        assert_eq!(state.circles[0].vel, Vec2::new(6.0, -4.0));
        assert_eq!(state.circles[0].radius, 80.0);
        // area corners double too, ordering intact
        assert_eq!(state.area.p1, Vec2::new(60.0, 20.0));
        assert!(state.area.p3.y > state.area.p4.y);
    }

    #[test]
    #[should_panic(expected = "degenerate viewport")]
    fn test_rescale_from_zero_viewport_panics() {
        let mut state = SimState::new(Vec2::new(400.0, 400.0));
        state.config.viewport = Vec2::new(0.0, 400.0);
        rescale(&mut state, Vec2::new(400.0, 400.0));
    }

    proptest! {
        #[test]
        fn prop_rescale_same_size_is_identity(
            w in 1.0f32..2000.0, h in 1.0f32..2000.0,
            x in 0.0f32..2000.0, y in 0.0f32..2000.0,
            vx in -100.0f32..100.0, vy in -100.0f32..100.0,
        ) {
            let mut state = SimState::new(Vec2::new(w, h));
            state.circles[0].pos = Vec2::new(x, y);
            state.circles[0].vel = Vec2::new(vx, vy);
            let before = state.clone();

            rescale(&mut state, Vec2::new(w, h));

            prop_assert_eq!(state, before);
        }
    }
}
