//! The 3x3 game state: [Player], [Outcome], [Coord] and [Board].
//!
//! The board is a plain value type: hypothetical positions during search are
//! created with [Board::clone_and_mark] and never alias the live board.

use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use nom::error::Error;
use nom::Finish;
use rand::Rng;

/// One of the two players. `Cross` always moves first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    Cross,
    Nought,
}

/// The absolute outcome of a finished game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outcome {
    WonBy(Player),
    Draw,
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::Cross, Player::Nought];

    pub fn other(self) -> Player {
        match self {
            Player::Cross => Player::Nought,
            Player::Nought => Player::Cross,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Player::Cross => 0,
            Player::Nought => 1,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Player::Cross => 'x',
            Player::Nought => 'o',
        }
    }
}

/// A cell coordinate, stored as a row-major index in `0..9`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coord(u8);

impl Coord {
    /// Build a coordinate from `row` and `col`, both in `0..3`.
    /// Panics for out-of-range values.
    pub fn from_rc(row: u8, col: u8) -> Coord {
        assert!(row < 3, "row {} out of range", row);
        assert!(col < 3, "col {} out of range", col);
        Coord(row * 3 + col)
    }

    pub fn from_index(index: u8) -> Coord {
        assert!(index < 9, "index {} out of range", index);
        Coord(index)
    }

    /// All coordinates in row-major order: row 0 left to right, then row 1, then row 2.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..9u8).map(Coord)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn row(self) -> u8 {
        self.0 / 3
    }

    pub fn col(self) -> u8 {
        self.0 % 3
    }
}

/// The board itself: nine tri-state cells and the count of marked cells.
///
/// `marked` is maintained incrementally and always equals the number of
/// non-empty cells. Cells are only ever written through [Board::mark], which
/// rejects occupied cells, so a mark is never overwritten.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [Option<Player>; 9],
    marked: u8,
}

// Scan order is part of the winner contract: all columns, then all rows,
// then the main diagonal, then the anti-diagonal.
const LINES: [[usize; 3]; 8] = [
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 4, 8],
    [2, 4, 6],
];

impl Board {
    pub fn new() -> Board {
        Board {
            cells: [None; 9],
            marked: 0,
        }
    }

    pub fn cell(&self, coord: Coord) -> Option<Player> {
        self.cells[coord.index() as usize]
    }

    /// Mark `coord` for `player`. Panics if the cell is already marked,
    /// callers are expected to check [Board::is_empty_cell] first.
    pub fn mark(&mut self, coord: Coord, player: Player) {
        assert!(
            self.is_empty_cell(coord),
            "cell {} is already marked on\n{}",
            coord,
            self
        );
        self.cells[coord.index() as usize] = Some(player);
        self.marked += 1;
    }

    /// Clone this board, mark `coord` for `player` on it and return the new board.
    pub fn clone_and_mark(&self, coord: Coord, player: Player) -> Board {
        let mut next = self.clone();
        next.mark(coord, player);
        next
    }

    pub fn is_empty_cell(&self, coord: Coord) -> bool {
        self.cell(coord).is_none()
    }

    /// All empty cells, in row-major order. The order matters: it decides
    /// move tie-breaking in search.
    pub fn empty_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(move |&coord| self.is_empty_cell(coord))
    }

    /// Pick a random empty cell with a uniform distribution.
    /// Panics if the board is full.
    pub fn random_empty_coord(&self, rng: &mut impl Rng) -> Coord {
        assert!(!self.is_full(), "no empty cell left on\n{}", self);
        let index = rng.gen_range(0..self.empty_coords().count());
        // unwrap is safe, the index is less than the iterator length
        self.empty_coords().nth(index).unwrap()
    }

    pub fn marked_count(&self) -> u8 {
        self.marked
    }

    pub fn is_full(&self) -> bool {
        self.marked == 9
    }

    pub fn is_empty(&self) -> bool {
        self.marked == 0
    }

    /// The player owning the first completed line under the fixed scan order,
    /// or `None` if no line is complete. Fullness is deliberately ignored:
    /// callers distinguish a draw from an unfinished game via [Board::is_full]
    /// or use [Board::outcome].
    pub fn winner(&self) -> Option<Player> {
        for line in &LINES {
            if let Some(player) = self.cells[line[0]] {
                if self.cells[line[1]] == Some(player) && self.cells[line[2]] == Some(player) {
                    return Some(player);
                }
            }
        }
        None
    }

    /// The outcome of this board, `None` while the game is still in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.winner() {
            Some(player) => Some(Outcome::WonBy(player)),
            None if self.is_full() => Some(Outcome::Draw),
            None => None,
        }
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

fn cell_to_char(cell: Option<Player>) -> char {
    match cell {
        Some(player) => player.to_char(),
        None => '.',
    }
}

impl Debug for Coord {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Coord({}, {})", self.row(), self.col())
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "+---+")?;
        for row in 0..3 {
            write!(f, "|")?;
            for col in 0..3 {
                write!(f, "{}", cell_to_char(self.cell(Coord::from_rc(row, col))))?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "+---+")?;
        Ok(())
    }
}

mod parse {
    use nom::character::complete::{char, one_of};
    use nom::combinator::{eof, map};
    use nom::multi::count;
    use nom::sequence::{terminated, tuple};
    use nom::IResult;

    use super::*;

    fn cell(input: &str) -> IResult<&str, Option<Player>> {
        map(one_of("xo."), |c| match c {
            'x' => Some(Player::Cross),
            'o' => Some(Player::Nought),
            '.' => None,
            _ => unreachable!(),
        })(input)
    }

    fn row(input: &str) -> IResult<&str, Vec<Option<Player>>> {
        count(cell, 3)(input)
    }

    pub(super) fn board(input: &str) -> IResult<&str, Board> {
        map(
            terminated(tuple((row, char('/'), row, char('/'), row)), eof),
            |(top, _, middle, _, bottom)| {
                let mut board = Board::new();
                let cells = top.into_iter().chain(middle).chain(bottom);
                for (index, cell) in cells.enumerate() {
                    if let Some(player) = cell {
                        board.mark(Coord::from_index(index as u8), player);
                    }
                }
                board
            },
        )(input)
    }
}

impl FromStr for Board {
    type Err = Error<String>;

    /// Parse the compact notation `"xo./.x./..o"`: three '/'-separated rows,
    /// top to bottom, with `x`, `o` or `.` per cell.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse::board(s).finish() {
            Ok((_, board)) => Ok(board),
            Err(Error { input, code }) => Err(Error {
                input: input.to_string(),
                code,
            }),
        }
    }
}
