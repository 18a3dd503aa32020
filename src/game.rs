//! The driver-facing game state: one live [Board], a turn indicator and an
//! optional engine opponent.

use rand::Rng;

use crate::ai::engine::{Difficulty, Engine};
use crate::ai::Bot;
use crate::board::{Board, Coord, Outcome, Player};

/// Whether both sides are driven externally or one side is played by the engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GameMode {
    TwoPlayer,
    VsEngine,
}

/// A running game. [Player::Cross] always moves first.
///
/// The game owns the single live board exclusively, all mutation goes through
/// [Game::apply_move]. The engine only ever receives a read-only view of the
/// board and returns a cell, which the driver applies like any other move.
#[derive(Debug)]
pub struct Game<R: Rng> {
    board: Board,
    engine: Engine<R>,
    mode: GameMode,
    next_player: Player,
}

impl<R: Rng> Game<R> {
    pub fn new(mode: GameMode, difficulty: Difficulty, engine_player: Player, rng: R) -> Self {
        Game {
            board: Board::new(),
            engine: Engine::new(difficulty, engine_player, rng),
            mode,
            next_player: Player::Cross,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The player whose turn it is. Kept at the last mover's opponent once
    /// the game is over.
    pub fn next_player(&self) -> Player {
        self.next_player
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.board.outcome()
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Validated mutation entry point: mark `coord` for the player whose turn
    /// it is and alternate the turn. Panics if the game is over or the cell
    /// is occupied, callers check [Board::is_empty_cell] first.
    pub fn apply_move(&mut self, coord: Coord) {
        assert!(!self.is_over(), "game is already over:\n{}", self.board);
        self.board.mark(coord, self.next_player);
        self.next_player = self.next_player.other();
    }

    /// Whether the engine should move now.
    pub fn is_engine_turn(&self) -> bool {
        self.mode == GameMode::VsEngine
            && !self.is_over()
            && self.next_player == self.engine.player()
    }

    /// Ask the engine for its move. The caller applies the returned cell
    /// through [Game::apply_move]. Panics if it is not the engine's turn.
    pub fn request_engine_move(&mut self) -> Coord {
        assert!(self.is_engine_turn(), "not the engine's turn");
        self.engine.select_move(&self.board)
    }

    /// Start over: fresh board, Cross to move. Mode and engine are kept.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.next_player = Player::Cross;
    }
}
