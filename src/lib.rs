//! Lane Dodge - a three-lane traffic dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (PRNG, enemy pool, clock, state machine, collisions)
//! - `renderer`: Quad draw commands and the vertex sink for a GPU backend
//! - `input`: Edge-triggered input collaborators
//! - `app`: Frame driver tying input, simulation and rendering together

pub mod app;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::App;
pub use settings::{Settings, TimestepMode};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// X centre of each lane in normalized device coordinates
    pub const LANE_POSITIONS: [f32; 3] = [-0.5, 0.0, 0.5];
    /// Lane the player starts (and restarts) in
    pub const CENTER_LANE: usize = 1;
    /// Player never moves vertically
    pub const PLAYER_Y: f32 = -0.7;

    /// Car footprint, shared by player and traffic
    pub const CAR_WIDTH: f32 = 0.15;
    pub const CAR_HEIGHT: f32 = 0.25;

    /// Enemy pool capacity
    pub const MAX_ENEMIES: usize = 10;
    /// Enemies enter just above the top edge
    pub const SPAWN_Y: f32 = 1.2;
    /// Enemies are retired once they fall below this
    pub const DESPAWN_Y: f32 = -1.2;

    /// Delay before the first spawn of a process
    pub const INITIAL_SPAWN_DELAY: f32 = 2.0;
    /// Spawn delay = base + (rand % steps) / 100
    pub const SPAWN_DELAY_BASE: f32 = 1.5;
    pub const SPAWN_DELAY_STEPS: u32 = 100;
    /// Enemy speed = base + (rand % steps) / 100
    pub const ENEMY_SPEED_BASE: f32 = 0.5;
    pub const ENEMY_SPEED_STEPS: u32 = 50;

    /// Default PRNG seed
    pub const DEFAULT_SEED: u32 = 1;

    /// Fixed timestep used when fixed-step mode is selected (60 Hz)
    pub const FIXED_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}

/// Lane index to its x coordinate
#[inline]
pub fn lane_x(lane: usize) -> f32 {
    consts::LANE_POSITIONS[lane.min(consts::LANE_POSITIONS.len() - 1)]
}

/// Size of a car as a vector
#[inline]
pub fn car_size() -> Vec2 {
    Vec2::new(consts::CAR_WIDTH, consts::CAR_HEIGHT)
}
