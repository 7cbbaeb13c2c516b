//! The prioritized move-selection ladder.

use tracing::debug;

use crate::board::Board;
use crate::core::{Coord, GameRng, Piece};

use super::tactics;

/// The computer's decision procedure.
///
/// Rules are tried in strict priority order and the first applicable one
/// wins; candidates are re-derived fresh from the board at every rung:
///
/// 1. win now;
/// 2. block the opponent's win;
/// 3. create a fork;
/// 4. block the opponent's fork;
/// 5. take the center;
/// 6. take a corner (tucked, then opposite an opponent corner, then random);
/// 7. take any remaining cell at random.
///
/// Ties inside a rung are broken uniformly at random where the rule says so,
/// otherwise by the ascending `(x, then y)` order of
/// [`Board::possible_moves`]. This ladder approximates optimal play without
/// game-tree search; against uniformly random opposition it never loses.
#[derive(Clone, Copy, Debug)]
pub struct Strategy {
    piece: Piece,
}

impl Strategy {
    /// Create a strategy playing `piece`.
    #[must_use]
    pub fn new(piece: Piece) -> Self {
        Self { piece }
    }

    /// The piece this strategy plays.
    #[must_use]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// Pick one legal move, or `None` if the game is already over.
    ///
    /// The board is not mutated: lookahead runs on a scratch copy, and every
    /// hypothetical placement on that copy is reverted before the next one.
    #[must_use]
    pub fn choose(&self, board: &Board, rng: &mut GameRng) -> Option<Coord> {
        if board.is_finished() {
            return None;
        }

        let me = self.piece;
        let them = me.other();
        let mut scratch = board.clone();

        let wins = tactics::winning_cells(&mut scratch, me);
        if !wins.is_empty() {
            debug!(piece = %me, candidates = wins.len(), "taking a winning cell");
            return rng.choose(&wins).copied();
        }

        let blocks = tactics::winning_cells(&mut scratch, them);
        if !blocks.is_empty() {
            debug!(piece = %me, candidates = blocks.len(), "blocking an opponent win");
            return rng.choose(&blocks).copied();
        }

        let forks = tactics::fork_cells(&mut scratch, me);
        if let Some(&coord) = forks.first() {
            debug!(piece = %me, %coord, "creating a fork");
            return Some(coord);
        }

        let opp_forks = tactics::fork_cells(&mut scratch, them);
        if !opp_forks.is_empty() {
            let coord = self.deny_fork(&mut scratch, &opp_forks);
            debug!(piece = %me, %coord, "blocking an opponent fork");
            return Some(coord);
        }

        let center = Coord::at(1, 1);
        if board.is_empty(center) {
            debug!(piece = %me, "taking the center");
            return Some(center);
        }

        if let Some(&corner) = tactics::tucked_corners(board, them).first() {
            debug!(piece = %me, %corner, "taking a tucked corner");
            return Some(corner);
        }

        if let Some(&corner) = tactics::counter_corners(board, them).first() {
            debug!(piece = %me, %corner, "taking the corner opposite the opponent");
            return Some(corner);
        }

        let corners = tactics::open_corners(board);
        if !corners.is_empty() {
            debug!(piece = %me, candidates = corners.len(), "taking a corner");
            return rng.choose(&corners).copied();
        }

        let moves = board.possible_moves();
        debug!(piece = %me, candidates = moves.len(), "taking a random cell");
        rng.choose(&moves).copied()
    }

    /// Pick the move that denies the opponent's fork(s).
    ///
    /// A single fork cell is simply taken. With two or more, taking one
    /// leaves the other open, so instead look for a forcing move: a cell
    /// that gives us a winning threat whose only block neither wins for the
    /// opponent outright nor hands them a fork. The classic case is the
    /// opponent holding two opposite corners against our center, where the
    /// forcing move is a side cell. If no safe forcing cell exists, fall
    /// back to occupying the first fork cell.
    fn deny_fork(&self, scratch: &mut Board, opp_forks: &[Coord]) -> Coord {
        if opp_forks.len() == 1 {
            return opp_forks[0];
        }
        self.safe_forcing_cell(scratch).unwrap_or(opp_forks[0])
    }

    fn safe_forcing_cell(&self, scratch: &mut Board) -> Option<Coord> {
        let me = self.piece;
        let them = me.other();

        for coord in scratch.possible_moves() {
            scratch.set(coord, Some(me));
            let threats = tactics::winning_cells(scratch, me);
            let safe = !threats.is_empty()
                && threats.iter().all(|&block| {
                    // The opponent is forced to block here; make sure the
                    // block does not become a fork for them.
                    scratch.set(block, Some(them));
                    let forked = tactics::winning_cells(scratch, them).len() >= 2;
                    scratch.set(block, None);
                    !forked
                });
            scratch.set(coord, None);
            if safe {
                return Some(coord);
            }
        }
        None
    }
}
