//! Deterministic simulation module
//!
//! All toy logic lives here. This module must be pure and deterministic:
//! - One step per frame, no wall-clock time
//! - Stable iteration order (by circle index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rescale;
pub mod state;
pub mod tick;

pub use collision::{
    Segment, angle_between_points, circle_segment_penetration, point_intersects_circle,
};
pub use rescale::{Axis, rescale, scaled};
pub use state::{Circle, Color, InteractiveArea, SimConfig, SimState};
pub use tick::{TickInput, tick};
