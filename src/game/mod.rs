//! Turn alternation, the move-source seam, and the self-play harness.

pub mod selfplay;
pub mod session;

pub use selfplay::{SelfPlay, SelfPlayConfig, SelfPlayReport};
pub use session::{MoveSource, RandomSource, Session};
