//! Deterministic session module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Discrete frame ticks only, no wall-clock reads
//! - Injected spawn randomness only
//! - No rendering or platform dependencies

pub mod spawn;
pub mod state;
pub mod tick;

pub use spawn::{PcgSpawn, SpawnSource, spawn_interval};
pub use state::{
    Countdown, EndReason, Item, ItemKind, Session, SessionEnd, StartOptions, Zone,
};
pub use tick::tick;
