//! Tactical board queries built on hypothetical moves.
//!
//! Each query tentatively places a piece, inspects the resulting position,
//! and reverts before trying the next candidate. The board handed in is
//! byte-for-byte identical when the query returns, move log included.

use smallvec::SmallVec;

use crate::board::{Board, MoveList};
use crate::core::{Coord, Piece};

/// The four corner cells in ascending `(x, then y)` order.
pub const CORNERS: [Coord; 4] = [
    Coord::at(0, 0),
    Coord::at(0, 2),
    Coord::at(2, 0),
    Coord::at(2, 2),
];

/// Cells where placing `piece` completes a line immediately.
#[must_use]
pub fn winning_cells(board: &mut Board, piece: Piece) -> MoveList {
    let mut cells = MoveList::new();
    for coord in board.possible_moves() {
        board.set(coord, Some(piece));
        let wins = board.winner() == Some(piece);
        board.set(coord, None);
        if wins {
            cells.push(coord);
        }
    }
    cells
}

/// Cells where placing `piece` creates a fork: two or more distinct winning
/// cells afterwards, unblockable by a single reply.
#[must_use]
pub fn fork_cells(board: &mut Board, piece: Piece) -> MoveList {
    let mut cells = MoveList::new();
    for coord in board.possible_moves() {
        board.set(coord, Some(piece));
        let threats = winning_cells(board, piece).len();
        board.set(coord, None);
        if threats >= 2 {
            cells.push(coord);
        }
    }
    cells
}

/// Empty corners tucked between two `by`-owned side cells.
#[must_use]
pub fn tucked_corners(board: &Board, by: Piece) -> SmallVec<[Coord; 4]> {
    CORNERS
        .iter()
        .copied()
        .filter(|&corner| {
            board.is_empty(corner)
                && corner
                    .adjacent_sides()
                    .iter()
                    .all(|&side| board.get(side) == Some(by))
        })
        .collect()
}

/// Empty corners diagonally opposite a `by`-owned corner.
#[must_use]
pub fn counter_corners(board: &Board, by: Piece) -> SmallVec<[Coord; 4]> {
    CORNERS
        .iter()
        .copied()
        .filter(|&corner| board.is_empty(corner) && board.get(corner.opposite()) == Some(by))
        .collect()
}

/// All empty corners.
#[must_use]
pub fn open_corners(board: &Board) -> SmallVec<[Coord; 4]> {
    CORNERS
        .iter()
        .copied()
        .filter(|&corner| board.is_empty(corner))
        .collect()
}
