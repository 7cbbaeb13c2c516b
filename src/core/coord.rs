//! Board coordinates.
//!
//! Cells are addressed by `(x, y)` with both components in `[0, 2]`, origin
//! top-left. The linear index is `x + y * 3` (row-major), which also defines
//! the 1-9 cell numbering used at the terminal: cell 1 is the top-left,
//! cell 9 the bottom-right.

use serde::{Deserialize, Serialize};

use super::error::MoveError;

/// A validated cell coordinate on the 3x3 grid.
///
/// `Coord` doubles as the move type: it is produced by the strategy or a
/// move source and consumed by [`Board::place`](crate::board::Board::place).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    x: u8,
    y: u8,
}

impl Coord {
    /// Create a coordinate, rejecting anything outside the 3x3 grid.
    pub fn new(x: u8, y: u8) -> Result<Self, MoveError> {
        if x > 2 || y > 2 {
            return Err(MoveError::OutOfRange(format!("({x}, {y})")));
        }
        Ok(Self { x, y })
    }

    /// Create a coordinate known to be in range.
    ///
    /// Internal construction only; out-of-range input is a caller bug.
    pub(crate) const fn at(x: u8, y: u8) -> Self {
        assert!(x <= 2 && y <= 2);
        Self { x, y }
    }

    /// Parse the 1-9 terminal numbering (row-major from the top-left).
    pub fn from_cell_number(n: u32) -> Result<Self, MoveError> {
        match n.checked_sub(1) {
            Some(i) if i < 9 => Ok(Self::at((i % 3) as u8, (i / 3) as u8)),
            _ => Err(MoveError::OutOfRange(n.to_string())),
        }
    }

    /// The 1-9 terminal number of this cell.
    #[must_use]
    pub const fn cell_number(self) -> u32 {
        self.index() as u32 + 1
    }

    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Linear index into the cell array: `x + y * 3`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.x as usize + self.y as usize * 3
    }

    /// Iterate over all 9 coordinates in ascending `(x, then y)` order.
    ///
    /// This is the deterministic tie-break order used whenever the strategy
    /// walks the open cells.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..3u8).flat_map(|x| (0..3u8).map(move |y| Coord { x, y }))
    }

    /// The center cell (1, 1).
    #[must_use]
    pub const fn is_center(self) -> bool {
        self.x == 1 && self.y == 1
    }

    /// One of the four cells with both components in `{0, 2}`.
    #[must_use]
    pub const fn is_corner(self) -> bool {
        self.x != 1 && self.y != 1
    }

    /// An edge cell: neither center nor corner.
    #[must_use]
    pub const fn is_side(self) -> bool {
        !self.is_center() && !self.is_corner()
    }

    /// The diagonally opposite cell, `(2 - x, 2 - y)`.
    #[must_use]
    pub const fn opposite(self) -> Coord {
        Coord {
            x: 2 - self.x,
            y: 2 - self.y,
        }
    }

    /// The two side cells adjacent to a corner.
    ///
    /// Only meaningful for corners; used by the tucked-corner heuristic.
    #[must_use]
    pub const fn adjacent_sides(self) -> [Coord; 2] {
        [Coord { x: 1, y: self.y }, Coord { x: self.x, y: 1 }]
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Coord::new(2, 2).is_ok());
        assert!(matches!(Coord::new(3, 0), Err(MoveError::OutOfRange(_))));
        assert!(matches!(Coord::new(0, 7), Err(MoveError::OutOfRange(_))));
    }

    #[test]
    fn test_linear_index() {
        assert_eq!(Coord::at(0, 0).index(), 0);
        assert_eq!(Coord::at(2, 0).index(), 2);
        assert_eq!(Coord::at(0, 1).index(), 3);
        assert_eq!(Coord::at(2, 2).index(), 8);
    }

    #[test]
    fn test_cell_number_round_trip() {
        for n in 1..=9u32 {
            let coord = Coord::from_cell_number(n).unwrap();
            assert_eq!(coord.cell_number(), n);
        }
        assert!(Coord::from_cell_number(0).is_err());
        assert!(Coord::from_cell_number(10).is_err());
    }

    #[test]
    fn test_all_is_ascending_x_then_y() {
        let coords: Vec<_> = Coord::all().collect();
        assert_eq!(coords.len(), 9);
        assert_eq!(coords[0], Coord::at(0, 0));
        assert_eq!(coords[1], Coord::at(0, 1));
        assert_eq!(coords[3], Coord::at(1, 0));
        assert_eq!(coords[8], Coord::at(2, 2));
    }

    #[test]
    fn test_classification() {
        assert!(Coord::at(1, 1).is_center());
        assert!(Coord::at(0, 0).is_corner());
        assert!(Coord::at(2, 0).is_corner());
        assert!(Coord::at(1, 0).is_side());
        assert!(Coord::at(2, 1).is_side());
        assert!(!Coord::at(1, 1).is_corner());
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Coord::at(0, 0).opposite(), Coord::at(2, 2));
        assert_eq!(Coord::at(2, 0).opposite(), Coord::at(0, 2));
        assert_eq!(Coord::at(1, 1).opposite(), Coord::at(1, 1));
    }

    #[test]
    fn test_adjacent_sides_of_corner() {
        let sides = Coord::at(0, 0).adjacent_sides();
        assert_eq!(sides, [Coord::at(1, 0), Coord::at(0, 1)]);

        let sides = Coord::at(2, 2).adjacent_sides();
        assert_eq!(sides, [Coord::at(1, 2), Coord::at(2, 1)]);
    }
}
