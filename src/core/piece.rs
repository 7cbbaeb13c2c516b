//! Game pieces.

use serde::{Deserialize, Serialize};

/// One of the two playing pieces.
///
/// Conventionally the human plays `X` and the computer plays `O`, but the
/// assignment is configurable at session construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    X,
    O,
}

impl Piece {
    /// Get the opposing piece.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Piece::X => Piece::O,
            Piece::O => Piece::X,
        }
    }

    /// Character used when rendering the board.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Piece::X => 'X',
            Piece::O => 'O',
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_piece() {
        assert_eq!(Piece::X.other(), Piece::O);
        assert_eq!(Piece::O.other(), Piece::X);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Piece::X), "X");
        assert_eq!(format!("{}", Piece::O), "O");
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Piece::O).unwrap();
        let back: Piece = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Piece::O);
    }
}
