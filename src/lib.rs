//! # tictactoe-engine
//!
//! A two-player tic-tac-toe engine pitting a human (or random stand-in)
//! against a prioritized heuristic computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: All randomness flows through an injected [`GameRng`];
//!    the same seed always produces the same game.
//!
//! 2. **Rollback Discipline**: The heuristic evaluates candidate moves by
//!    tentatively placing a piece, querying the winner, and reverting. The
//!    board it probes is left byte-for-byte identical afterwards.
//!
//! 3. **Derived Results**: Win/draw status is never cached; it is recomputed
//!    from the cells on demand.
//!
//! ## Modules
//!
//! - `core`: Pieces, coordinates, RNG, move-error taxonomy
//! - `board`: The 9-cell grid, winning-line scan, move log, rendering
//! - `strategy`: The win > block > fork > block-fork > center > corner ladder
//! - `game`: Turn alternation, the move-source seam, the self-play harness

pub mod board;
pub mod core;
pub mod game;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{Coord, GameRng, MoveError, Piece};

pub use crate::board::{Board, GameStatus, MoveList, WINNING_LINES};

pub use crate::strategy::Strategy;

pub use crate::game::{
    MoveSource, RandomSource, SelfPlay, SelfPlayConfig, SelfPlayReport, Session,
};
