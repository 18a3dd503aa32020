use tictactoe_ai::board::{Board, Coord, Outcome, Player};
use tictactoe_ai::util::board_gen::board_with_moves;
use tictactoe_ai::util::tiny::consistent_rng;

mod common;
use common::board;

fn coords(pairs: &[(u8, u8)]) -> Vec<Coord> {
    pairs.iter().map(|&(r, c)| Coord::from_rc(r, c)).collect()
}

#[test]
fn empty_board() {
    let board = Board::new();

    assert!(board.is_empty());
    assert!(!board.is_full());
    assert_eq!(board.marked_count(), 0);
    assert_eq!(board.winner(), None);
    assert_eq!(board.outcome(), None);
    assert_eq!(board.empty_coords().count(), 9);
    assert!(Coord::all().all(|coord| board.cell(coord).is_none()));
}

#[test]
fn marked_count_matches_cells() {
    let moves = coords(&[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);

    let mut board = Board::new();
    let mut player = Player::Cross;
    for (i, &coord) in moves.iter().enumerate() {
        board.mark(coord, player);
        player = player.other();

        let non_empty = Coord::all().filter(|&c| board.cell(c).is_some()).count();
        assert_eq!(board.marked_count() as usize, non_empty);
        assert_eq!(board.marked_count() as usize, i + 1);
    }

    // the sequence completes the top row for cross
    assert_eq!(board.winner(), Some(Player::Cross));
    assert_eq!(board.outcome(), Some(Outcome::WonBy(Player::Cross)));
}

#[test]
fn empty_coords_row_major() {
    let board = board("x.o/.x./o..");
    let expected = coords(&[(0, 1), (1, 0), (1, 2), (2, 1), (2, 2)]);
    assert_eq!(board.empty_coords().collect::<Vec<_>>(), expected);
}

#[test]
fn all_winning_lines() {
    let lines: [[(u8, u8); 3]; 8] = [
        [(0, 0), (1, 0), (2, 0)],
        [(0, 1), (1, 1), (2, 1)],
        [(0, 2), (1, 2), (2, 2)],
        [(0, 0), (0, 1), (0, 2)],
        [(1, 0), (1, 1), (1, 2)],
        [(2, 0), (2, 1), (2, 2)],
        [(0, 0), (1, 1), (2, 2)],
        [(0, 2), (1, 1), (2, 0)],
    ];

    for &line in &lines {
        for &player in &Player::BOTH {
            let mut board = Board::new();
            for &(r, c) in &line {
                board.mark(Coord::from_rc(r, c), player);
            }

            assert_eq!(board.winner(), Some(player), "line {:?}", line);
            assert_eq!(board.outcome(), Some(Outcome::WonBy(player)));
        }
    }
}

#[test]
fn no_complete_line() {
    let board = board("xox/oxo/...");
    assert_eq!(board.winner(), None);
    assert_eq!(board.outcome(), None);
}

#[test]
fn draw_detection() {
    let board = board("xxo/oox/xxo");

    assert!(board.is_full());
    assert_eq!(board.marked_count(), 9);
    assert_eq!(board.winner(), None);
    assert_eq!(board.outcome(), Some(Outcome::Draw));
}

#[test]
fn winner_scan_priority() {
    // two complete columns, the lower column index is found first
    assert_eq!(board("o.x/o.x/o.x").winner(), Some(Player::Nought));
    assert_eq!(board("x.o/x.o/x.o").winner(), Some(Player::Cross));

    // two complete rows, the earlier row is found first
    assert_eq!(board("xxx/ooo/...").winner(), Some(Player::Cross));
    assert_eq!(board("ooo/xxx/...").winner(), Some(Player::Nought));
}

#[test]
fn board_with_moves_matches_notation() {
    let moves = coords(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
    let built = board_with_moves(Board::new(), Player::Cross, &moves);
    assert_eq!(built, board("xx./oo./..."));
}

#[test]
fn parse_notation() {
    let board = board("xo./.x./..o");

    assert_eq!(board.cell(Coord::from_rc(0, 0)), Some(Player::Cross));
    assert_eq!(board.cell(Coord::from_rc(0, 1)), Some(Player::Nought));
    assert_eq!(board.cell(Coord::from_rc(1, 1)), Some(Player::Cross));
    assert_eq!(board.cell(Coord::from_rc(2, 2)), Some(Player::Nought));
    assert_eq!(board.marked_count(), 4);

    assert!("xx./oo".parse::<Board>().is_err());
    assert!("xyz/.../...".parse::<Board>().is_err());
    assert!("xo./.x./..o ".parse::<Board>().is_err());
    assert!("xo./.x./..oo".parse::<Board>().is_err());
}

#[test]
fn display_grid() {
    let expected = "+---+\n|xo.|\n|.x.|\n|..o|\n+---+\n";
    assert_eq!(board("xo./.x./..o").to_string(), expected);
}

#[test]
fn random_empty_coord_uniform() {
    let board = board("x.o/.x./o..");
    let expected: Vec<Coord> = board.empty_coords().collect();

    let mut rng = consistent_rng();
    common::test_sampler_uniform(&expected, || board.random_empty_coord(&mut rng));
}

#[test]
#[should_panic(expected = "already marked")]
fn mark_occupied_panics() {
    let mut board = Board::new();
    board.mark(Coord::from_rc(0, 0), Player::Cross);
    board.mark(Coord::from_rc(0, 0), Player::Nought);
}

#[test]
#[should_panic(expected = "out of range")]
fn coord_out_of_range_panics() {
    Coord::from_rc(3, 0);
}

#[test]
#[should_panic(expected = "no empty cell")]
fn random_coord_on_full_board_panics() {
    let board = board("xxo/oox/xxo");
    board.random_empty_coord(&mut consistent_rng());
}
