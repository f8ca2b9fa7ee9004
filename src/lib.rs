//! Jar Drop - a gravity toy with draggable circles
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, collisions, rescaling)
//! - `settings`: Persisted tunables (gravity, dampening, HUD)
//!
//! Rendering, input capture and frame scheduling live in the host
//! (`src/main.rs`) and only read/write the simulation through `sim`.

pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Simulation constants
pub mod consts {
    /// Downward acceleration added to `vy` every frame (simulation units)
    pub const GRAVITY: f32 = 2.7;
    /// Per-frame velocity damping factor, in (0, 1]
    pub const DAMPENING: f32 = 0.85;

    /// Circle radius as a fraction of the viewport width
    pub const CIRCLE_RADIUS_FRACTION: f32 = 0.1;
    /// Default circle outline width
    pub const CIRCLE_LINE_WIDTH: f32 = 1.0;

    /// Lateral "kick" per degree of floor impact angle
    pub const FLOOR_KICK_PER_DEGREE: f32 = 0.7;

    /// Soft band around the interactive edge that triggers a response
    pub const EDGE_RESPONSE_BAND: f32 = 5.0;

    /// Interactive area offsets from the viewport edges
    pub const AREA_OFFSET_TOP: f32 = 10.0;
    pub const AREA_OFFSET_RIGHT: f32 = 30.0;
    pub const AREA_OFFSET_BOTTOM: f32 = 10.0;
    pub const AREA_OFFSET_LEFT: f32 = 30.0;
    /// Extra drop on the bottom-right corner, sloping the collision edge
    pub const AREA_EDGE_DROP: f32 = 5.0;
}
