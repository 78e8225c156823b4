//! Fruit Catch - a pose-controlled falling-object catching game
//!
//! Core modules:
//! - `sim`: Deterministic session state machine (spawning, falling, catching, scoring)
//! - `platform`: Browser boundary exposing the session to the page's collaborators
//!
//! The sim is driven by two external schedulers that never touch each other:
//! a frame loop calling [`sim::tick`] once per rendered frame, and a coarse
//! one-second timer calling [`sim::Session::second_elapsed`]. A classifier
//! collaborator feeds position labels through
//! [`sim::Session::on_position_command`].

pub mod platform;
pub mod sim;

pub use sim::{Session, StartOptions, Zone};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (square canvas)
    pub const PLAYFIELD_WIDTH: f32 = 600.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Horizontal lane coordinates, strictly ordered left to right
    pub const ZONE_LEFT_X: f32 = 100.0;
    pub const ZONE_CENTER_X: f32 = 300.0;
    pub const ZONE_RIGHT_X: f32 = 500.0;

    /// Items spawn this far above the top edge
    pub const SPAWN_HEIGHT: f32 = -50.0;
    /// Items past this height are silently despawned (no miss penalty)
    pub const DESPAWN_HEIGHT: f32 = 650.0;

    /// Vertical band where the catcher can resolve an item: [top, bottom)
    pub const CATCH_BAND_TOP: f32 = 500.0;
    pub const CATCH_BAND_BOTTOM: f32 = 550.0;
    /// Horizontal catch tolerance around the catcher's lane coordinate
    pub const CATCH_PROXIMITY: f32 = 50.0;

    /// Base fall speed in units per tick
    pub const BASE_FALL_SPEED: f32 = 3.0;
    /// Extra fall speed per level
    pub const FALL_SPEED_PER_LEVEL: f32 = 0.5;

    /// Spawn cadence: max(floor, base - level * step) frames between spawns
    pub const SPAWN_INTERVAL_BASE: u32 = 60;
    pub const SPAWN_INTERVAL_PER_LEVEL: u32 = 4;
    pub const SPAWN_INTERVAL_FLOOR: u32 = 20;

    /// Points for catching a good item
    pub const GOOD_ITEM_VALUE: u64 = 100;
    /// Probability a spawned item is good (rest are hazards)
    pub const GOOD_ITEM_CHANCE: f32 = 0.7;

    /// Score needed per level step
    pub const POINTS_PER_LEVEL: u64 = 1000;

    /// Default session length in seconds
    pub const DEFAULT_TIME_LIMIT_SECS: u32 = 60;
}
