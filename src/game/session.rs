//! One game: a move source against the heuristic, X moving first.

use std::io;

use tracing::warn;

use crate::board::{Board, GameStatus};
use crate::core::{Coord, GameRng, Piece};
use crate::strategy::Strategy;

/// Supplier of moves for one side of the board.
///
/// This is the seam for the human-input collaborator: the interactive binary
/// implements it over stdin, tests implement it with scripted move lists,
/// and the harness uses [`RandomSource`].
///
/// An `Err` means the source can produce no further moves at all (input
/// exhausted); a merely invalid move is not an error here. Sources either
/// validate before returning or rely on the session to reject the move and
/// ask again.
pub trait MoveSource {
    /// Produce a candidate move for `piece` on `board`.
    fn next_move(&mut self, board: &Board, piece: Piece) -> io::Result<Coord>;
}

/// Picks uniformly at random among the open cells.
///
/// Stands in for the human in the self-play harness.
#[derive(Clone, Debug)]
pub struct RandomSource {
    rng: GameRng,
}

impl RandomSource {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl MoveSource for RandomSource {
    fn next_move(&mut self, board: &Board, _piece: Piece) -> io::Result<Coord> {
        let moves = board.possible_moves();
        // The session never asks for a move on a finished board.
        Ok(moves[self.rng.gen_range(0..moves.len())])
    }
}

/// A single game session: one [`MoveSource`] side, one [`Strategy`] side.
///
/// Turns strictly alternate starting with X; whichever side owns X moves
/// first. The session owns the board exclusively for its lifetime.
pub struct Session<S: MoveSource> {
    board: Board,
    source: S,
    source_piece: Piece,
    strategy: Strategy,
    rng: GameRng,
}

impl<S: MoveSource> Session<S> {
    /// Create a session with an empty board.
    ///
    /// `source_piece` is the side played by `source`; the strategy takes the
    /// other piece and draws its tie-breaks from `rng`.
    pub fn new(source: S, source_piece: Piece, rng: GameRng) -> Self {
        Self {
            board: Board::new(),
            source,
            source_piece,
            strategy: Strategy::new(source_piece.other()),
            rng,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Reset the board for another round. Harness use only, never mid-game.
    pub fn reset(&mut self) {
        self.board.clear();
    }

    /// Play one full turn: an X move, then an O move, skipping either side
    /// once the game is finished.
    pub fn play_turn(&mut self) -> io::Result<GameStatus> {
        if !self.board.is_finished() {
            self.take_move(Piece::X)?;
        }
        if !self.board.is_finished() {
            self.take_move(Piece::O)?;
        }
        Ok(self.board.status())
    }

    /// Play turns until the game ends.
    pub fn play(&mut self) -> io::Result<GameStatus> {
        loop {
            let status = self.play_turn()?;
            if status != GameStatus::InProgress {
                return Ok(status);
            }
        }
    }

    fn take_move(&mut self, piece: Piece) -> io::Result<()> {
        if piece == self.source_piece {
            // Re-ask on any rejected move; bad input never aborts the game.
            loop {
                let coord = self.source.next_move(&self.board, piece)?;
                match self.board.place(coord, piece) {
                    Ok(()) => return Ok(()),
                    Err(err) => warn!(%err, %coord, "rejected move, asking again"),
                }
            }
        } else {
            let Some(coord) = self.strategy.choose(&self.board, &mut self.rng) else {
                return Ok(());
            };
            if let Err(err) = self.board.place(coord, piece) {
                // The heuristic only selects open cells; a rejection here is
                // a bug in the ladder, not a recoverable condition.
                unreachable!("heuristic produced an illegal move: {err}");
            }
            Ok(())
        }
    }
}
