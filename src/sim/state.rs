//! Simulation state and core types
//!
//! Everything the stepper reads or writes lives here. The state is an
//! explicit value passed into `tick` each frame; there are no globals.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// An opaque RGB color, serialized for the canvas as a CSS string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };

    /// CSS color string for the 2D canvas API
    pub fn css(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// A simulated circle
///
/// Fixed-field record: the stepper updates `pos`/`vel` and never touches the
/// visual fields. Circles are created once per session and never destroyed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub line_width: f32,
    pub fill_color: Color,
    pub stroke_color: Color,
}

impl Circle {
    pub fn new(pos: Vec2, radius: f32, fill_color: Color, stroke_color: Color) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            line_width: CIRCLE_LINE_WIDTH,
            fill_color,
            stroke_color,
        }
    }
}

/// Quadrilateral sub-area whose bottom edge (`p3 -> p4`) is an extra
/// collision surface, distinct from the viewport floor.
///
/// Point order is fixed: top-left, top-right, bottom-right, bottom-left.
/// The rescaler preserves this ordering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractiveArea {
    pub p1: Vec2,
    pub p2: Vec2,
    pub p3: Vec2,
    pub p4: Vec2,
}

impl InteractiveArea {
    /// Build the area from fixed offsets off the viewport edges.
    ///
    /// The bottom-right corner sits `AREA_EDGE_DROP` lower than the
    /// bottom-left one, so the collision edge is slightly sloped.
    pub fn from_viewport(viewport: Vec2) -> Self {
        Self {
            p1: Vec2::new(AREA_OFFSET_LEFT, AREA_OFFSET_TOP),
            p2: Vec2::new(viewport.x - AREA_OFFSET_RIGHT, AREA_OFFSET_TOP),
            p3: Vec2::new(
                viewport.x - AREA_OFFSET_RIGHT,
                viewport.y - AREA_OFFSET_BOTTOM + AREA_EDGE_DROP,
            ),
            p4: Vec2::new(AREA_OFFSET_LEFT, viewport.y - AREA_OFFSET_BOTTOM),
        }
    }
}

/// Session-wide parameters
///
/// Constant within a session except `viewport`, which only the rescaler
/// updates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    pub gravity: f32,
    /// Velocity damping per frame, in (0, 1]
    pub dampening: f32,
    /// Bounding box of the simulation (canvas size)
    pub viewport: Vec2,
}

impl SimConfig {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            gravity: GRAVITY,
            dampening: DAMPENING,
            viewport,
        }
    }
}

/// Complete simulation state for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimState {
    pub config: SimConfig,
    pub circles: Vec<Circle>,
    pub area: InteractiveArea,
    /// Index of the circle currently held by the pointer, if any.
    /// A single scalar by design: the domain has exactly one pointer.
    pub picked_up: Option<usize>,
}

impl SimState {
    /// Create the session state for the given viewport size
    pub fn new(viewport: Vec2) -> Self {
        let radius = viewport.x * CIRCLE_RADIUS_FRACTION;
        let circles = vec![
            Circle::new(viewport / 2.0, radius, Color::BLACK, Color::RED),
            Circle::new(viewport / 3.0, radius, Color::RED, Color::BLACK),
        ];

        Self {
            config: SimConfig::new(viewport),
            circles,
            area: InteractiveArea::from_viewport(viewport),
            picked_up: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let state = SimState::new(Vec2::new(400.0, 400.0));

        assert_eq!(state.circles.len(), 2);
        assert_eq!(state.circles[0].pos, Vec2::new(200.0, 200.0));
        assert_eq!(state.circles[1].pos, Vec2::new(400.0 / 3.0, 400.0 / 3.0));
        for circle in &state.circles {
            assert_eq!(circle.vel, Vec2::ZERO);
            assert_eq!(circle.radius, 40.0);
        }
        assert_eq!(state.picked_up, None);
    }

    #[test]
    fn test_area_point_order() {
        let area = InteractiveArea::from_viewport(Vec2::new(400.0, 300.0));

        // top-left, top-right, bottom-right, bottom-left
        assert_eq!(area.p1, Vec2::new(30.0, 10.0));
        assert_eq!(area.p2, Vec2::new(370.0, 10.0));
        assert_eq!(area.p3, Vec2::new(370.0, 295.0));
        assert_eq!(area.p4, Vec2::new(30.0, 290.0));
        // collision edge slopes: p3 sits below p4
        assert!(area.p3.y > area.p4.y);
    }

    #[test]
    fn test_color_css() {
        assert_eq!(Color::BLACK.css(), "rgb(0,0,0)");
        assert_eq!(Color::RED.css(), "rgb(255,0,0)");
    }
}
