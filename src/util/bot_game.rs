//! Run bots against each other and report the results.
use itertools::Itertools;

use crate::ai::Bot;
use crate::board::{Board, Outcome, Player};
use crate::wdl::{Flip, POV, WDL};

/// The aggregated result of a [run], from `bot_l`'s point of view.
#[derive(Debug)]
pub struct BotGameResult {
    pub game_count: u32,
    pub wdl_l: WDL<u32>,
    pub average_game_length: f32,
}

impl BotGameResult {
    /// The same totals seen from `bot_r`'s side.
    pub fn wdl_r(&self) -> WDL<u32> {
        self.wdl_l.flip()
    }
}

/// Run `bot_l` against `bot_r` on the positions produced by `start`.
///
/// The side to move in a start position follows from its mark count (Cross
/// opens every game). `games_per_side` start positions are generated; `bot_l`
/// plays Cross on each, and with `both_sides` the same positions are replayed
/// with the sides switched. Games run sequentially to completion.
pub fn run<L: Bot, R: Bot>(
    start: impl Fn() -> Board,
    bot_l: &mut L,
    bot_r: &mut R,
    games_per_side: u32,
    both_sides: bool,
) -> BotGameResult {
    let starts = (0..games_per_side).map(|_| start()).collect_vec();
    let sides: &[Player] = if both_sides {
        &Player::BOTH
    } else {
        &[Player::Cross]
    };

    let mut wdl_l = WDL::<u32>::default();
    let mut total_moves: u64 = 0;
    let mut game_count = 0;

    for start in &starts {
        for &player_l in sides {
            let (outcome, length) = play_single_game(start, player_l, bot_l, bot_r);
            wdl_l += outcome.pov(player_l).to_wdl();
            total_moves += length as u64;
            game_count += 1;
        }
    }

    BotGameResult {
        game_count,
        wdl_l,
        average_game_length: total_moves as f32 / game_count as f32,
    }
}

fn play_single_game<L: Bot, R: Bot>(
    start: &Board,
    player_l: Player,
    bot_l: &mut L,
    bot_r: &mut R,
) -> (Outcome, u32) {
    let mut board = start.clone();
    let mut next_player = if board.marked_count() % 2 == 0 {
        Player::Cross
    } else {
        Player::Nought
    };
    let mut length = 0;

    loop {
        match board.outcome() {
            None => {
                let coord = if next_player == player_l {
                    bot_l.select_move(&board)
                } else {
                    bot_r.select_move(&board)
                };
                board.mark(coord, next_player);
                next_player = next_player.other();
                length += 1;
            }
            Some(outcome) => return (outcome, length),
        }
    }
}
