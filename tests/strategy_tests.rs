//! End-to-end scenarios for the heuristic ladder.

use tictactoe_engine::{Board, Coord, GameRng, Piece, Strategy};

fn board_with(placements: &[(u8, u8, Piece)]) -> Board {
    let mut board = Board::new();
    for &(x, y, piece) in placements {
        board.place(Coord::new(x, y).unwrap(), piece).unwrap();
    }
    board
}

fn at(x: u8, y: u8) -> Coord {
    Coord::new(x, y).unwrap()
}

#[test]
fn empty_board_computer_takes_center() {
    let board = Board::new();
    let strategy = Strategy::new(Piece::O);

    for seed in 0..20 {
        let coord = strategy.choose(&board, &mut GameRng::new(seed)).unwrap();
        assert_eq!(coord, at(1, 1));
    }
}

#[test]
fn blocks_the_open_diagonal() {
    // X . .
    // . X .
    // . . .
    let board = board_with(&[(0, 0, Piece::X), (1, 1, Piece::X)]);
    let strategy = Strategy::new(Piece::O);

    let coord = strategy.choose(&board, &mut GameRng::new(1)).unwrap();
    assert_eq!(coord, at(2, 2));
}

#[test]
fn blocks_the_column_win() {
    // X holds (0, 0) and (0, 1); the winning cell (0, 2) must be denied.
    let board = board_with(&[(0, 0, Piece::X), (0, 1, Piece::X)]);
    let strategy = Strategy::new(Piece::O);

    for seed in 0..20 {
        let coord = strategy.choose(&board, &mut GameRng::new(seed)).unwrap();
        assert_eq!(coord, at(0, 2));
    }
}

#[test]
fn takes_its_own_win_over_a_block() {
    let board = board_with(&[
        (0, 0, Piece::X),
        (0, 1, Piece::X),
        (2, 0, Piece::O),
        (2, 1, Piece::O),
    ]);
    let strategy = Strategy::new(Piece::O);

    let coord = strategy.choose(&board, &mut GameRng::new(1)).unwrap();
    assert_eq!(coord, at(2, 2));

    let mut after = board.clone();
    after.place(coord, Piece::O).unwrap();
    assert_eq!(after.winner(), Some(Piece::O));
}

#[test]
fn denies_the_double_corner_fork() {
    // X on opposite corners against O's center: O must answer with a
    // forcing side cell, not a corner.
    let board = board_with(&[(0, 0, Piece::X), (2, 2, Piece::X), (1, 1, Piece::O)]);
    let strategy = Strategy::new(Piece::O);

    let coord = strategy.choose(&board, &mut GameRng::new(1)).unwrap();
    assert!(coord.is_side());
}

#[test]
fn survives_the_double_corner_line_even_against_best_replies() {
    // Play the trap out: X answers O's forcing move with the best reply at
    // every step. O must never fall behind.
    let mut board = board_with(&[(0, 0, Piece::X), (2, 2, Piece::X), (1, 1, Piece::O)]);
    let o = Strategy::new(Piece::O);
    let x = Strategy::new(Piece::X);
    let mut rng = GameRng::new(5);

    loop {
        let Some(coord) = o.choose(&board, &mut rng) else {
            break;
        };
        board.place(coord, Piece::O).unwrap();
        if board.is_finished() {
            break;
        }

        let Some(coord) = x.choose(&board, &mut rng) else {
            break;
        };
        board.place(coord, Piece::X).unwrap();
        if board.is_finished() {
            break;
        }
    }

    assert_ne!(board.winner(), Some(Piece::X));
}

#[test]
fn chosen_moves_are_always_legal() {
    // Whatever the position, the ladder only ever selects an open cell.
    let mut rng = GameRng::new(99);
    let strategy = Strategy::new(Piece::O);

    for seed in 0..50 {
        let mut board = Board::new();
        let mut filler = GameRng::new(seed);
        let mut piece = Piece::X;

        while !board.is_finished() {
            if piece == Piece::O {
                let coord = strategy.choose(&board, &mut rng).unwrap();
                assert!(board.is_empty(coord));
                board.place(coord, piece).unwrap();
            } else {
                let moves = board.possible_moves();
                let coord = moves[filler.gen_range(0..moves.len())];
                board.place(coord, piece).unwrap();
            }
            piece = piece.other();
        }
    }
}
