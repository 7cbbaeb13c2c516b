//! Batch self-play: random X against the heuristic O.
//!
//! A regression harness rather than a trainer: it replays many rounds on a
//! single board via [`Board::clear`] and tallies the outcomes. The heuristic
//! is expected to never lose to random play, so any X win in the tally is a
//! bug in the ladder.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::board::{Board, GameStatus};
use crate::core::{GameRng, Piece};
use crate::strategy::Strategy;

/// Configuration for a self-play run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SelfPlayConfig {
    /// Number of rounds to play.
    pub rounds: usize,

    /// Seed for both the random player and the heuristic's tie-breaks.
    /// Same seed produces an identical report.
    pub seed: u64,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            rounds: 1000,
            seed: 42,
        }
    }
}

impl SelfPlayConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of rounds.
    #[must_use]
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Outcome tallies of a self-play run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfPlayReport {
    pub rounds: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl SelfPlayReport {
    /// True when the heuristic (playing O) lost no round.
    #[must_use]
    pub fn strategy_unbeaten(&self) -> bool {
        self.x_wins == 0
    }
}

impl std::fmt::Display for SelfPlayReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} rounds: {} X wins, {} O wins, {} draws",
            self.rounds, self.x_wins, self.o_wins, self.draws
        )
    }
}

/// The self-play runner.
///
/// Rounds run sequentially on one board; a parallel runner would need a
/// board per worker.
pub struct SelfPlay {
    config: SelfPlayConfig,
}

impl SelfPlay {
    #[must_use]
    pub fn new(config: SelfPlayConfig) -> Self {
        Self { config }
    }

    /// Run all rounds and tally the outcomes.
    pub fn run(&self) -> SelfPlayReport {
        let mut strategy_rng = GameRng::new(self.config.seed);
        let mut random_rng = strategy_rng.fork();
        let strategy = Strategy::new(Piece::O);
        let mut board = Board::new();

        let mut report = SelfPlayReport {
            rounds: self.config.rounds,
            ..SelfPlayReport::default()
        };

        for round in 0..self.config.rounds {
            board.clear();
            Self::play_round(&mut board, &strategy, &mut random_rng, &mut strategy_rng);

            let status = board.status();
            trace!(round, ?status, moves = board.move_log().len(), "round finished");
            match status {
                GameStatus::Won(Piece::X) => report.x_wins += 1,
                GameStatus::Won(Piece::O) => report.o_wins += 1,
                GameStatus::Draw => report.draws += 1,
                GameStatus::InProgress => {
                    unreachable!("round ended with the game still in progress")
                }
            }
        }

        report
    }

    fn play_round(
        board: &mut Board,
        strategy: &Strategy,
        random_rng: &mut GameRng,
        strategy_rng: &mut GameRng,
    ) {
        loop {
            // Random X stand-in.
            let moves = board.possible_moves();
            board.set(moves[random_rng.gen_range(0..moves.len())], Some(Piece::X));
            if board.is_finished() {
                return;
            }

            // Heuristic O.
            let Some(coord) = strategy.choose(board, strategy_rng) else {
                return;
            };
            board.set(coord, Some(Piece::O));
            if board.is_finished() {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builders() {
        let config = SelfPlayConfig::new().with_rounds(50).with_seed(9);
        assert_eq!(config.rounds, 50);
        assert_eq!(config.seed, 9);
    }

    #[test]
    fn test_tallies_sum_to_rounds() {
        let report = SelfPlay::new(SelfPlayConfig::new().with_rounds(25)).run();
        assert_eq!(report.rounds, 25);
        assert_eq!(report.x_wins + report.o_wins + report.draws, 25);
    }

    #[test]
    fn test_same_seed_same_report() {
        let config = SelfPlayConfig::new().with_rounds(40).with_seed(123);
        let a = SelfPlay::new(config.clone()).run();
        let b = SelfPlay::new(config).run();
        assert_eq!(a, b);
    }

    #[test]
    fn test_report_serde_round_trip() {
        let report = SelfPlay::new(SelfPlayConfig::new().with_rounds(10)).run();
        let json = serde_json::to_string(&report).unwrap();
        let back: SelfPlayReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, back);
    }
}
