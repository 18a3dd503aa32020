#![warn(missing_debug_implementations)]

//! A tic-tac-toe game core: the board state model and the decision engine
//! that computes the next move. There is no rendering or input handling in
//! here, a driver owns a [Board](crate::board::Board), mutates it after every
//! move and asks the engine for a cell when it is the engine's turn.
//!
//! The pieces:
//! * [Board](crate::board::Board) owns the grid state, mark placement,
//!     emptiness queries and win/draw detection.
//! * [Engine](crate::ai::engine::Engine) picks a move for a fixed side,
//!     either uniformly random or optimal via exhaustive
//!     [minimax](crate::ai::minimax::evaluate) search.
//! * [Game](crate::game::Game) is a headless driver state machine: turn
//!     alternation, validated moves and the engine-turn handshake.
//!
//! The board is fixed at 3x3 with three-in-a-row to win. The search itself
//! would generalize to NxN with a k-in-a-row rule, but no such configuration
//! is exposed.
//!
//! # Examples
//!
//! ## Mark a random empty cell
//!
//! ```
//! use tictactoe_ai::board::{Board, Player};
//!
//! let mut rng = rand::thread_rng();
//! let mut board = Board::new();
//!
//! let coord = board.random_empty_coord(&mut rng);
//! board.mark(coord, Player::Cross);
//! println!("{}", board);
//! ```
//!
//! ## Ask the engine for the optimal move
//!
//! ```
//! use tictactoe_ai::ai::engine::{Difficulty, Engine};
//! use tictactoe_ai::ai::Bot;
//! use tictactoe_ai::board::{Board, Coord, Player};
//!
//! let board: Board = "xx./oo./...".parse().unwrap();
//! let mut engine = Engine::new(Difficulty::Optimal, Player::Cross, rand::thread_rng());
//!
//! // completing the top row wins on the spot
//! assert_eq!(engine.select_move(&board), Coord::from_rc(0, 2));
//! ```

pub mod board;
pub mod wdl;

pub mod ai;

pub mod game;

pub mod util;
