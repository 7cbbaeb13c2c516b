//! The board: cell storage, mutation, status queries, and the move log.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Coord, MoveError, Piece};

use super::lines;

/// A list of cell coordinates; never more than 9, so it lives on the stack.
pub type MoveList = SmallVec<[Coord; 9]>;

/// Game status derived from the cells on demand; never cached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Piece),
    Draw,
}

/// The 3x3 grid.
///
/// Cells transition empty -> occupied exactly once during normal play; the
/// only paths back to empty are the hypothetical-move rollback inside the
/// strategy and [`Board::clear`] between harness rounds.
///
/// Every occupied-cell write is appended to a move log kept for post-game
/// diagnostics; rolling a hypothetical back drops its log entry, so the log
/// always mirrors the committed moves.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Piece>; 9],
    log: Vec<(Coord, Piece)>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The piece at `coord`, if any.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Piece> {
        self.cells[coord.index()]
    }

    /// Whether `coord` is unoccupied.
    #[must_use]
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord).is_none()
    }

    /// Overwrite a cell unconditionally.
    ///
    /// This is the raw mutation used by hypothetical-move evaluation: place
    /// with `Some(piece)`, query, then revert with `None`. Callers making a
    /// real move should go through [`Board::place`], which checks emptiness.
    ///
    /// Writing a piece appends to the move log; writing `None` drops the most
    /// recent log entry for that cell, so a place-then-revert pair leaves the
    /// log untouched.
    pub fn set(&mut self, coord: Coord, cell: Option<Piece>) {
        self.cells[coord.index()] = cell;
        match cell {
            Some(piece) => self.log.push((coord, piece)),
            None => {
                if let Some(pos) = self.log.iter().rposition(|&(c, _)| c == coord) {
                    self.log.remove(pos);
                }
            }
        }
    }

    /// Make a real move: reject the cell if it already holds a piece.
    pub fn place(&mut self, coord: Coord, piece: Piece) -> Result<(), MoveError> {
        if self.get(coord).is_some() {
            return Err(MoveError::Occupied {
                x: coord.x(),
                y: coord.y(),
            });
        }
        self.set(coord, Some(piece));
        Ok(())
    }

    /// All currently empty cells, ascending by `(x, then y)`.
    ///
    /// This order is the documented tie-break: heuristics that take the first
    /// acceptable candidate walk this list, so equally good moves resolve the
    /// same way on every run.
    #[must_use]
    pub fn possible_moves(&self) -> MoveList {
        Coord::all().filter(|&c| self.is_empty(c)).collect()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// The piece owning a complete line, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Piece> {
        lines::scan(&self.cells)
    }

    /// Whether no empty cell remains.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Whether the game is over: a winner exists or the board is full.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Derive the game status from the cells.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(piece) => GameStatus::Won(piece),
            None if self.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Reset all cells to empty and wipe the move log.
    ///
    /// Used by the self-play harness between rounds, never mid-game.
    pub fn clear(&mut self) {
        self.cells = [None; 9];
        self.log.clear();
    }

    /// The committed moves in order, for post-game diagnostics.
    #[must_use]
    pub fn move_log(&self) -> &[(Coord, Piece)] {
        &self.log
    }
}

impl std::fmt::Display for Board {
    /// Render the grid with `.` for empty cells and row dividers, e.g.
    ///
    /// ```text
    ///  X | . | .
    /// -----------
    ///  . | O | .
    /// -----------
    ///  . | . | X
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..3u8 {
            if y > 0 {
                writeln!(f, "-----------")?;
            }
            let mut row = String::new();
            for x in 0..3u8 {
                if x > 0 {
                    row.push_str(" | ");
                }
                let cell = self.cells[Coord::at(x, y).index()];
                row.push(cell.map_or('.', Piece::as_char));
            }
            writeln!(f, " {row} ")?;
        }
        Ok(())
    }
}
