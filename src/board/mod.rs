//! The 9-cell grid: mutation, win/draw detection, legal-move enumeration.

pub mod grid;
pub mod lines;

pub use grid::{Board, GameStatus, MoveList};
pub use lines::WINNING_LINES;
