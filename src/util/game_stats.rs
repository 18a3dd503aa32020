//! Game statistics used to test the board and search implementations.
use std::collections::HashSet;

use crate::board::{Board, Player};

/// The number of move sequences of length `depth` playable from `board` with
/// `to_move` to play, including sequences whose final move ends the game.
/// See <https://www.chessprogramming.org/Perft>.
pub fn perft(board: &Board, to_move: Player, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    if board.outcome().is_some() {
        return 0;
    }

    let mut total = 0;
    for coord in board.empty_coords() {
        let child = board.clone_and_mark(coord, to_move);
        total += perft(&child, to_move.other(), depth - 1);
    }
    total
}

/// Collect every position reachable from `board` under alternating play,
/// paired with the player to move in it. Done positions are kept only when
/// `include_done` is set and are never expanded further.
pub fn all_positions(board: &Board, to_move: Player, include_done: bool) -> Vec<(Board, Player)> {
    let mut set = HashSet::new();
    let mut result = vec![];
    all_positions_impl(board, to_move, include_done, &mut result, &mut set);
    result
}

fn all_positions_impl(
    board: &Board,
    to_move: Player,
    include_done: bool,
    result: &mut Vec<(Board, Player)>,
    set: &mut HashSet<(Board, Player)>,
) {
    let done = board.outcome().is_some();
    if done && !include_done {
        return;
    }
    if !set.insert((board.clone(), to_move)) {
        return;
    }
    result.push((board.clone(), to_move));
    if done {
        return;
    }

    for coord in board.empty_coords() {
        let child = board.clone_and_mark(coord, to_move);
        all_positions_impl(&child, to_move.other(), include_done, result, set);
    }
}
