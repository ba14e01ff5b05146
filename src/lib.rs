//! Ortho Break - a rectangular-arena Arkanoid
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, collisions, game state)
//! - `renderer`: WebGPU rendering pipeline
//! - `config`: Data-driven session/level configuration

pub mod config;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep. Physics is integrated with this constant
    /// regardless of presentation frame rate.
    pub const SIM_DT: f32 = 0.016;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield walls in normalized scene coordinates
    pub const LEFT_WALL: f32 = -0.8;
    pub const RIGHT_WALL: f32 = 0.7;
    pub const TOP_WALL: f32 = 0.9;
    /// Falling past this line is the loss condition (no reflection)
    pub const BOTTOM_BOUND: f32 = -1.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 0.02;
    pub const BALL_START_POS: Vec2 = Vec2::new(0.0, -0.85);
    pub const BALL_START_VEL: Vec2 = Vec2::new(0.5, 0.5);
    /// Element-wise scale applied to the velocity on the one launch step
    pub const LAUNCH_DIRECTION: Vec2 = Vec2::new(1.0, 1.0);

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 0.2;
    pub const PADDLE_HEIGHT: f32 = 0.02;
    pub const PADDLE_Y: f32 = -0.9;
    pub const PADDLE_SPEED: f32 = 2.0;
}

/// Component-wise clamp of a point into the box given by min/max corners
#[inline]
pub fn clamp_point(p: Vec2, min: Vec2, max: Vec2) -> Vec2 {
    Vec2::new(p.x.clamp(min.x, max.x), p.y.clamp(min.y, max.y))
}
