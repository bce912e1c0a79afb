//! Core engine types: coordinates, directions, RNG, configuration.
//!
//! These are the fundamental building blocks shared by every other module.
//! Games configure the engine via `GameConfig` rather than modifying it.

pub mod config;
pub mod coord;
pub mod rng;

pub use config::GameConfig;
pub use coord::{Coordinate, Direction};
pub use rng::{GameRng, GameRngState};
