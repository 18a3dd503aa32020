//! The decision engine: a [Bot] with a configurable difficulty.

use std::fmt::{Debug, Formatter};

use rand::Rng;

use crate::ai::minimax::evaluate;
use crate::ai::Bot;
use crate::board::{Board, Coord, Player};

/// How the engine selects its moves.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Difficulty {
    /// A uniformly random legal move.
    Random,
    /// The game-theoretically optimal move found by [evaluate].
    Optimal,
}

/// The automated opponent: a fixed identity, a difficulty and an rng.
///
/// Apart from the rng used at [Difficulty::Random], no state is carried
/// between calls: each move request depends only on the board passed in.
pub struct Engine<R: Rng> {
    difficulty: Difficulty,
    player: Player,
    rng: R,
}

impl<R: Rng> Engine<R> {
    pub fn new(difficulty: Difficulty, player: Player, rng: R) -> Self {
        Engine {
            difficulty,
            player,
            rng,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The side this engine plays as, fixed for its lifetime.
    pub fn player(&self) -> Player {
        self.player
    }
}

impl<R: Rng> Debug for Engine<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Engine {{ difficulty: {:?}, player: {:?} }}",
            self.difficulty, self.player
        )
    }
}

impl<R: Rng> Bot for Engine<R> {
    fn select_move(&mut self, board: &Board) -> Coord {
        assert!(board.outcome().is_none(), "board is already done:\n{}", board);

        match self.difficulty {
            Difficulty::Random => board.random_empty_coord(&mut self.rng),
            Difficulty::Optimal => {
                // unwrap is safe, the board is not done so the top-level
                // recursion always keeps a move
                evaluate(board, self.player == Player::Cross).best_move.unwrap()
            }
        }
    }
}
