//! Winning-line tables and the line scan.

use crate::core::Piece;

/// The 8 winning lines as linear-index triples: 3 rows, 3 columns,
/// 2 diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Scan all 8 lines for a fully-owned one.
///
/// Checks X before O. A board where both pieces own a complete line is
/// unreachable under alternating play; in that degenerate state the scan
/// reports X.
pub(crate) fn scan(cells: &[Option<Piece>; 9]) -> Option<Piece> {
    for piece in [Piece::X, Piece::O] {
        let owned = WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&i| cells[i] == Some(piece)));
        if owned {
            return Some(piece);
        }
    }
    None
}
