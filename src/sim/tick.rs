//! Per-frame simulation step
//!
//! Advances the whole circle collection by one frame: pointer pickup,
//! integration, boundary bounce, floor kick, interactive-edge response.
//! Circles never collide with each other, so processing order does not
//! affect the result.

use glam::Vec2;

use super::collision::{
    Segment, angle_between_points, circle_segment_penetration, point_intersects_circle,
};
use super::state::SimState;
use crate::consts::*;

/// Pointer input for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Pointer position in simulation (canvas) coordinates
    pub pointer: Vec2,
    /// True while the pointer is held down (level-triggered)
    pub pressed: bool,
    /// A click happened since the last frame (edge-triggered, cleared by
    /// the host after each tick)
    pub clicked: bool,
}

/// Advance the simulation by one frame
pub fn tick(state: &mut SimState, input: &TickInput) {
    let config = state.config;
    let edge = Segment {
        p1: state.area.p3,
        p2: state.area.p4,
    };

    // Releasing the pointer drops whatever was held; evaluated once,
    // before the per-circle pass.
    if !input.pressed {
        state.picked_up = None;
    }

    for (index, circle) in state.circles.iter_mut().enumerate() {
        // Pickup: grab the circle under the pointer and snap it there.
        // The teleport is deliberate; a drag injects no velocity.
        if input.pressed
            && (state.picked_up.is_none() || state.picked_up == Some(index))
            && point_intersects_circle(input.pointer, circle.pos, circle.radius)
        {
            state.picked_up = Some(index);
            circle.pos = input.pointer;
        }

        // Integration: gravity, then damping, then position.
        circle.vel.y += config.gravity;
        circle.vel *= config.dampening;
        circle.pos += circle.vel;

        // Boundary bounce. Vertical and horizontal checks are independent,
        // so a corner hit reflects both components in the same frame.
        let mut floor_hit: Option<(Vec2, Vec2)> = None;
        if circle.pos.y + circle.radius > config.viewport.y {
            // Capture the impact point before clamping; the kick below
            // measures the angle against the surface's lowest point.
            let impact = Vec2::new(circle.pos.x, circle.pos.y + circle.radius);
            let surface_low = Vec2::new(circle.pos.x, config.viewport.y);
            circle.pos.y = config.viewport.y - circle.radius;
            circle.vel.y = -circle.vel.y.abs();
            floor_hit = Some((impact, surface_low));
        } else if circle.pos.y - circle.radius < 0.0 {
            circle.pos.y = circle.radius;
            circle.vel.y = circle.vel.y.abs();
        }
        if circle.pos.x + circle.radius > config.viewport.x {
            circle.pos.x = config.viewport.x - circle.radius;
            circle.vel.x = -circle.vel.x.abs();
        } else if circle.pos.x - circle.radius < 0.0 {
            circle.pos.x = circle.radius;
            circle.vel.x = circle.vel.x.abs();
        }

        // Uneven-floor kick: lateral energy proportional to the impact
        // angle. Floor hits only, and not a reflection law.
        if let Some((impact, surface_low)) = floor_hit {
            let kick = angle_between_points(impact, surface_low) * FLOOR_KICK_PER_DEGREE;
            circle.vel += Vec2::splat(kick);
        }

        // Interactive edge: soft response band on both sides of the
        // surface. The flip is unconditional, unlike the floor's
        // sign-aware bounce.
        let penetration = circle_segment_penetration(circle.pos, circle.radius, &edge);
        if penetration.abs() < EDGE_RESPONSE_BAND {
            circle.pos.y -= penetration.abs();
            circle.vel.y = -circle.vel.y;
        }
    }
}
