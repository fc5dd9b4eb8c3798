use std::time::Duration;

use crate::error::MoveError;
use crate::game::{Checker, GameState, Move};

/// A move-producing strategy bound to one checker. Implementations are
/// human input readers, random movers, or search-backed bots; each only
/// needs to produce a Move or signal that none is available.
pub trait Player {
    /// The checker this player drops.
    fn checker(&self) -> Checker;

    /// Produce this player's move in the given state, or `None` when no
    /// move is available.
    fn get_move(&mut self, state: &GameState) -> Option<Move>;

    /// Take a turn: checks it is actually this player's turn, then applies
    /// the produced move and returns the resulting state.
    fn make_move(&mut self, state: &GameState) -> Result<GameState, MoveError> {
        if self.checker() != state.current_checker() {
            return Err(MoveError::OutOfTurn);
        }
        match self.get_move(state) {
            Some(mv) => Ok(mv.after_state),
            None => Err(MoveError::NoMoveAvailable),
        }
    }
}

/// Pause bot players take before answering, so console games stay
/// watchable.
pub(crate) fn think_pause(delay: Duration) {
    if !delay.is_zero() {
        std::thread::sleep(delay);
    }
}
