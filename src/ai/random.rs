//! A bot that plays uniformly random moves.
use std::fmt::{Debug, Formatter};

use rand::Rng;

use crate::ai::Bot;
use crate::board::{Board, Coord};

/// Bot that chooses a move randomly uniformly among the empty cells.
/// Every call is an independent draw, no state is carried between calls.
pub struct RandomBot<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        RandomBot { rng }
    }
}

impl<R: Rng> Debug for RandomBot<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RandomBot")
    }
}

impl<R: Rng> Bot for RandomBot<R> {
    fn select_move(&mut self, board: &Board) -> Coord {
        assert!(board.outcome().is_none(), "board is already done:\n{}", board);
        board.random_empty_coord(&mut self.rng)
    }
}
