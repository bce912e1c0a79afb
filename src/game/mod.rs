//! The game orchestrator.
//!
//! `Game` wires the components together and owns all mutable state: the
//! board, the tile registry, the RNG, the settlement tracker, the event
//! queue, and the scoreboard.
//!
//! ## Control flow
//!
//! 1. `tick` polls the input source - at most one intent per tick, and
//!    none at all while transitions are in flight.
//! 2. An accepted intent runs the resolver; effects mutate the board
//!    immediately and are emitted for the presentation layer, which
//!    reports each slide/merge back via `transition_complete`.
//! 3. The completion that settles the board triggers the spawner, then
//!    the terminal evaluator; their results are emitted as events.

pub mod input;
pub mod score;
pub mod terminal;

pub use input::{InputSource, QueuedInput};
pub use score::ScoreBoard;
pub use terminal::TerminalEvaluator;

use crate::board::BoardState;
use crate::core::{Direction, GameConfig, GameRng};
use crate::events::{EventQueue, GameEvent};
use crate::moves::{Effect, MoveResolver, TileSpawner};
use crate::settle::{SettlementPhase, SettlementTracker};
use crate::tiles::TileRegistry;

/// A complete game: configuration plus all live state.
///
/// ## Example
///
/// ```
/// use merge_grid::core::{Direction, GameConfig};
/// use merge_grid::game::Game;
///
/// let mut game = Game::new(GameConfig::classic(), 42);
/// assert_eq!(game.board().vacant_count(), 14); // two starting tiles
///
/// if game.try_move(Direction::Left) {
///     // animate drained events, then report each slide/merge complete
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    board: BoardState,
    tiles: TileRegistry,
    rng: GameRng,
    tracker: SettlementTracker,
    events: EventQueue,
    score: ScoreBoard,
    /// Latched when a merge reaches the win threshold, consumed at settle.
    round_win: Option<u32>,
}

impl Game {
    /// Create a game and spawn the two starting tiles.
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let rng = GameRng::new(seed);
        Self::with_rng(config, rng)
    }

    /// Create a game seeded from OS entropy.
    #[must_use]
    pub fn from_entropy(config: GameConfig) -> Self {
        Self::with_rng(config, GameRng::from_entropy())
    }

    /// Resume a game from a board snapshot.
    ///
    /// The registry must hold exactly the tiles on the board, and every
    /// tile value must be a ladder value; anything else panics (the
    /// snapshot is corrupt, not user-recoverable). The game starts
    /// settled with a zeroed score and no pending events.
    #[must_use]
    pub fn from_state(
        config: GameConfig,
        board: BoardState,
        tiles: TileRegistry,
        seed: u64,
    ) -> Self {
        assert_eq!(
            board.size(),
            config.board_size,
            "Board size does not match configuration"
        );
        let mut on_board = 0;
        for (_, id) in board.occupied() {
            let tile = tiles
                .get(id)
                .expect("Board references a tile that is not in the registry");
            assert!(
                config.ladder.contains(tile.value),
                "Tile value {} is not a ladder value",
                tile.value
            );
            on_board += 1;
        }
        assert_eq!(
            on_board,
            tiles.len(),
            "Registry holds tiles that are not on the board"
        );

        Self {
            board,
            tiles,
            rng: GameRng::new(seed),
            tracker: SettlementTracker::new(),
            events: EventQueue::new(),
            score: ScoreBoard::new(),
            round_win: None,
            config,
        }
    }

    fn with_rng(config: GameConfig, rng: GameRng) -> Self {
        let mut game = Self {
            board: BoardState::new(config.board_size),
            tiles: TileRegistry::new(),
            rng,
            tracker: SettlementTracker::new(),
            events: EventQueue::new(),
            score: ScoreBoard::new(),
            round_win: None,
            config,
        };
        game.spawn_starting_tiles();
        game
    }

    /// Poll the input source and issue at most one move.
    ///
    /// While the board is `Busy` the source is not polled at all, so
    /// intents raised mid-animation are dropped, never buffered. Returns
    /// whether a move was issued.
    pub fn tick(&mut self, input: &mut dyn InputSource) -> bool {
        if !self.tracker.is_settled() {
            return false;
        }
        match input.poll() {
            Some(direction) => self.try_move(direction),
            None => false,
        }
    }

    /// Issue a move directly.
    ///
    /// Dropped (returns `false`) while `Busy`. A move that changes
    /// nothing is not an error: no events, no state change, the board
    /// stays `Settled`. Returns whether the board changed.
    pub fn try_move(&mut self, direction: Direction) -> bool {
        if !self.tracker.is_settled() {
            return false;
        }

        let outcome =
            MoveResolver::resolve(&mut self.board, &mut self.tiles, &self.config.ladder, direction);

        for &effect in outcome.iter() {
            self.events.emit(GameEvent::Effect(effect));
            if let Effect::Merge { value, .. } = effect {
                self.score.record_merge(value);
                self.events.emit(GameEvent::ScoreIncreased { value });
                if value == self.config.win_value {
                    self.round_win = Some(value);
                }
            }
        }

        if outcome.moved() {
            self.tracker.begin(outcome.transition_count() as u32);
            true
        } else {
            false
        }
    }

    /// Report one slide/merge animation as finished.
    ///
    /// Must be called exactly once per emitted effect with
    /// `needs_settlement()`. The call that settles the board runs the
    /// spawner and then the terminal evaluator. Panics on a surplus call.
    pub fn transition_complete(&mut self) {
        if self.tracker.complete() {
            self.settle();
        }
    }

    /// Start a fresh game with a new seed, keeping the best score.
    ///
    /// Pending events are discarded along with the old board.
    pub fn restart(&mut self, seed: u64) {
        self.board = BoardState::new(self.config.board_size);
        self.tiles = TileRegistry::new();
        self.rng = GameRng::new(seed);
        self.tracker = SettlementTracker::new();
        self.events = EventQueue::new();
        self.score.reset();
        self.round_win = None;
        self.spawn_starting_tiles();
    }

    // === Accessors ===

    /// The configuration this game was created with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// The live tiles.
    #[must_use]
    pub fn tiles(&self) -> &TileRegistry {
        &self.tiles
    }

    /// The scoreboard.
    #[must_use]
    pub fn score(&self) -> &ScoreBoard {
        &self.score
    }

    /// Current settlement phase.
    #[must_use]
    pub fn phase(&self) -> SettlementPhase {
        self.tracker.phase()
    }

    /// Check whether input is currently accepted.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.tracker.is_settled()
    }

    /// Check whether any direction can still change the board.
    #[must_use]
    pub fn can_move(&self) -> bool {
        TerminalEvaluator::can_move(&self.board, &self.tiles)
    }

    /// Remove and return all pending events, oldest first.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain()
    }

    /// Peek at pending events without draining them.
    #[must_use]
    pub fn pending_events(&self) -> &[GameEvent] {
        self.events.pending()
    }

    // === Internals ===

    fn spawn_starting_tiles(&mut self) {
        for _ in 0..2 {
            self.spawn_tile();
        }
    }

    fn spawn_tile(&mut self) {
        if let Some(effect) =
            TileSpawner::spawn(&mut self.board, &mut self.tiles, &self.config.ladder, &mut self.rng)
        {
            self.events.emit(GameEvent::Effect(effect));
        }
    }

    /// The settled-transition trigger: spawn, then terminal evaluation.
    fn settle(&mut self) {
        self.spawn_tile();

        if let Some(value) = self.round_win.take() {
            self.events.emit(GameEvent::Won { value });
        }

        if !self.can_move() {
            self.events.emit(GameEvent::GameOver);
        }
    }
}
