//! # merge-grid
//!
//! A 2048-style sliding-tile merge puzzle engine: the logical grid
//! simulation only. Rendering, platform input, and persistence live
//! outside the crate behind narrow seams.
//!
//! ## Design Principles
//!
//! 1. **Logical-before-visual**: A move mutates the board synchronously
//!    the moment it is issued. Animations are presentation-only; the
//!    engine just counts them and gates input until they settle.
//!
//! 2. **One source of truth**: The board maps coordinates to tile ids and
//!    keeps the vacant-coordinate index in lock-step. Tiles hold values,
//!    never positions.
//!
//! 3. **Configuration over convention**: Board size, the value ladder,
//!    and the win threshold come from `GameConfig`; the classic 4x4 game
//!    is just a default.
//!
//! ## Control Flow
//!
//! An input collaborator reports a direction intent, the resolver turns
//! it into slide/merge effects against the board, and each effect
//! registers one outstanding transition. When the presentation layer has
//! reported them all complete, the settlement tracker triggers the
//! spawner and then the terminal evaluator. Everything collaborators need
//! - effect notifications, score deltas, win, game over - arrives through
//! one drained event queue.
//!
//! ## Modules
//!
//! - `core`: Coordinates, directions, RNG, configuration
//! - `tiles`: Tile entities, the value ladder, the registry
//! - `board`: The occupancy grid and its vacant index
//! - `moves`: The slide/merge resolver and the spawner
//! - `settle`: The outstanding-transition tracker
//! - `events`: The outbound event queue
//! - `game`: The orchestrator, input seam, score, terminal evaluation

pub mod board;
pub mod core;
pub mod events;
pub mod game;
pub mod moves;
pub mod settle;
pub mod tiles;

// Re-export commonly used types
pub use crate::core::{Coordinate, Direction, GameConfig, GameRng, GameRngState};

pub use crate::board::BoardState;

pub use crate::tiles::{Ladder, LadderEntry, Rgb, Tile, TileId, TileRegistry, TileStyle};

pub use crate::moves::{Effect, MoveOutcome, MoveResolver, TileSpawner};

pub use crate::settle::{SettlementPhase, SettlementTracker};

pub use crate::events::{EventQueue, GameEvent};

pub use crate::game::{Game, InputSource, QueuedInput, ScoreBoard, TerminalEvaluator};
