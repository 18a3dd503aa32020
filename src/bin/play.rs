//! Minimal terminal driver: human moves come from stdin as `row col`,
//! engine moves are requested and applied in between.
//!
//! Flags: `--pvp` (no engine), `--random` (level 0 engine), `--cross`
//! (engine plays the opening side).

use std::io::{self, BufRead, Write};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use tictactoe_ai::ai::engine::Difficulty;
use tictactoe_ai::board::{Coord, Outcome, Player};
use tictactoe_ai::game::{Game, GameMode};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mode = if args.iter().any(|a| a == "--pvp") {
        GameMode::TwoPlayer
    } else {
        GameMode::VsEngine
    };
    let difficulty = if args.iter().any(|a| a == "--random") {
        Difficulty::Random
    } else {
        Difficulty::Optimal
    };
    let engine_player = if args.iter().any(|a| a == "--cross") {
        Player::Cross
    } else {
        Player::Nought
    };

    let mut game = Game::new(mode, difficulty, engine_player, SmallRng::from_entropy());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        while game.is_engine_turn() {
            let coord = game.request_engine_move();
            println!("engine marks {}", coord);
            game.apply_move(coord);
        }

        println!("{}", game.board());

        match game.outcome() {
            Some(Outcome::WonBy(player)) => {
                println!("{} wins", player.to_char());
                return;
            }
            Some(Outcome::Draw) => {
                println!("draw");
                return;
            }
            None => {}
        }

        print!("{} to move (row col): ", game.next_player().to_char());
        io::stdout().flush().unwrap();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => return,
        };

        let mut parts = line.split_whitespace();
        let row = parts.next().and_then(|s| s.parse::<u8>().ok());
        let col = parts.next().and_then(|s| s.parse::<u8>().ok());
        let coord = match (row, col) {
            (Some(row), Some(col)) if row < 3 && col < 3 => Coord::from_rc(row, col),
            _ => {
                println!("expected two numbers in 0..3");
                continue;
            }
        };

        if !game.board().is_empty_cell(coord) {
            println!("cell {} is already marked", coord);
            continue;
        }
        game.apply_move(coord);
    }
}
