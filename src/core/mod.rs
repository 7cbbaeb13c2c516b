//! Core types: pieces, coordinates, errors, and the injectable RNG.

pub mod coord;
pub mod error;
pub mod piece;
pub mod rng;

pub use coord::Coord;
pub use error::MoveError;
pub use piece::Piece;
pub use rng::GameRng;
