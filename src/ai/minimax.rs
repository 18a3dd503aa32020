//! Exhaustive minimax search over hypothetical boards.

use crate::ai::Bot;
use crate::board::{Board, Coord, Outcome, Player};
use crate::wdl::POV;

/// The result of [evaluate]: the value of the board and the move that
/// achieves it. `best_move` is `None` only for terminal boards.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Evaluation {
    pub score: i32,
    pub best_move: Option<Coord>,
}

/// Search the complete game tree below `board` and return its value together
/// with the best move for the side to play.
///
/// The scoring convention is fixed: a board won by [Player::Cross] scores `+1`,
/// one won by [Player::Nought] scores `-1` and a draw scores `0`, independent
/// of `maximizing`. Cross is always the maximizing side, so the side to move
/// at this level is Cross iff `maximizing`.
///
/// Children are tried in row-major order and only a strictly better score
/// replaces the current best, so ties go to the first move found. The search
/// visits every node (depth at most 9), no pruning or caching is involved,
/// and `board` itself is never modified.
pub fn evaluate(board: &Board, maximizing: bool) -> Evaluation {
    if let Some(winner) = board.winner() {
        return Evaluation {
            score: Outcome::WonBy(winner).pov(Player::Cross).sign(),
            best_move: None,
        };
    }
    if board.is_full() {
        return Evaluation {
            score: 0,
            best_move: None,
        };
    }

    let player = if maximizing {
        Player::Cross
    } else {
        Player::Nought
    };

    let mut best: Option<Evaluation> = None;

    for coord in board.empty_coords() {
        let child = board.clone_and_mark(coord, player);
        let score = evaluate(&child, !maximizing).score;

        let better = match best {
            None => true,
            Some(best) if maximizing => score > best.score,
            Some(best) => score < best.score,
        };
        if better {
            best = Some(Evaluation {
                score,
                best_move: Some(coord),
            });
        }
    }

    // unwrap is safe, a non-terminal board has at least one empty cell
    best.unwrap()
}

/// Bot that plays the game-theoretically optimal move for a fixed side.
/// Deterministic: the same board always yields the same move.
#[derive(Debug)]
pub struct MinimaxBot {
    player: Player,
}

impl MinimaxBot {
    pub fn new(player: Player) -> Self {
        MinimaxBot { player }
    }

    pub fn player(&self) -> Player {
        self.player
    }
}

impl Bot for MinimaxBot {
    fn select_move(&mut self, board: &Board) -> Coord {
        assert!(board.outcome().is_none(), "board is already done:\n{}", board);
        // unwrap is safe, the board is not done so the top-level recursion
        // always keeps a move
        evaluate(board, self.player == Player::Cross).best_move.unwrap()
    }
}
