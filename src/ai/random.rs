use std::time::Duration;

use crate::game::{Checker, GameState, Move};

use super::player::{think_pause, Player};

/// A player that picks uniformly among the possible moves.
pub struct RandomPlayer {
    checker: Checker,
    delay: Duration,
}

impl RandomPlayer {
    pub fn new(checker: Checker) -> Self {
        RandomPlayer {
            checker,
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(checker: Checker, delay: Duration) -> Self {
        RandomPlayer { checker, delay }
    }
}

impl Player for RandomPlayer {
    fn checker(&self) -> Checker {
        self.checker
    }

    fn get_move(&mut self, state: &GameState) -> Option<Move> {
        think_pause(self.delay);
        state.make_random_move()
    }
}
