//! Error taxonomy for move validation.
//!
//! Both variants are recoverable at the human-input boundary: the offending
//! input is reported and the player is asked again. The heuristic only ever
//! selects from the open cells, so a rejection on the computer side is an
//! internal-invariant violation, not a recoverable condition.

/// A move that cannot be applied to the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// A coordinate or cell number that does not address one of the 9 cells.
    #[error("no such cell: {0}")]
    OutOfRange(String),

    /// A move aimed at a cell that already holds a piece.
    #[error("cell ({x}, {y}) already holds a piece")]
    Occupied { x: u8, y: u8 },
}
