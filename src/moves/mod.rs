//! Move resolution: effects, the slide/merge resolver, and the spawner.
//!
//! ## Key Types
//!
//! - `Effect`: One atomic board mutation (slide, merge, spawn)
//! - `MoveOutcome`: The ordered effects one move produced
//! - `MoveResolver`: The per-direction frontier compaction algorithm
//! - `TileSpawner`: Post-settlement random tile generation

pub mod effect;
pub mod resolver;
pub mod spawner;

pub use effect::Effect;
pub use resolver::{MoveOutcome, MoveResolver};
pub use spawner::TileSpawner;
