//! Computer move selection: the prioritized heuristic ladder and its
//! tactical sub-queries.

pub mod heuristic;
pub mod tactics;

pub use heuristic::Strategy;
