//! Utilities to build a `Board` in a given or random state.
use rand::Rng;

use crate::board::{Board, Coord, Player};

/// Play `moves` in order on `start`, alternating players starting with `first`.
pub fn board_with_moves(start: Board, first: Player, moves: &[Coord]) -> Board {
    let mut curr = start;
    let mut player = first;
    for &coord in moves {
        assert!(
            curr.outcome().is_none(),
            "board already done, playing {} on\n{}",
            coord,
            curr
        );
        assert!(
            curr.is_empty_cell(coord),
            "cell not empty, playing {} on\n{}",
            coord,
            curr
        );
        curr.mark(coord, player);
        player = player.other();
    }
    curr
}

/// Play `n` random moves on `start`, alternating players starting with `first`.
/// Panics if the game ends before all `n` moves are played.
pub fn random_board_with_moves(start: &Board, first: Player, n: u32, rng: &mut impl Rng) -> Board {
    let mut board = start.clone();
    let mut player = first;
    for _ in 0..n {
        assert!(board.outcome().is_none(), "game ended early on\n{}", board);
        let coord = board.random_empty_coord(rng);
        board.mark(coord, player);
        player = player.other();
    }
    board
}
