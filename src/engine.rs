//! Ties two players and a renderer into a complete game.

use crate::ai::Player;
use crate::error::{GameError, MoveError};
use crate::game::{Checker, GameState};

/// Anything that can display a game state: the core only guarantees that
/// board cells, winner and tie are consistent and side-effect-free to read.
pub trait Renderer {
    fn render(&mut self, state: &GameState);
}

/// Callback invoked for move errors a player is expected to recover from.
pub type ErrorHandler = Box<dyn FnMut(&MoveError)>;

/// A full game: two players holding different checkers plus a renderer.
pub struct Game {
    player1: Box<dyn Player>,
    player2: Box<dyn Player>,
    renderer: Box<dyn Renderer>,
    error_handler: Option<ErrorHandler>,
}

impl Game {
    pub fn new(
        player1: Box<dyn Player>,
        player2: Box<dyn Player>,
        renderer: Box<dyn Renderer>,
    ) -> Result<Self, GameError> {
        if player1.checker() == player2.checker() {
            return Err(GameError::InvalidGameState(
                "players must use different checkers".into(),
            ));
        }
        Ok(Game {
            player1,
            player2,
            renderer,
            error_handler: None,
        })
    }

    pub fn with_error_handler(mut self, handler: ErrorHandler) -> Self {
        self.error_handler = Some(handler);
        self
    }

    /// Play a game from an empty board and return the final state.
    /// Recoverable move errors are reported and the same player is asked
    /// again; a player that yields no move at all ends the game where it
    /// stands, since asking again could never make progress.
    pub fn play(&mut self, starting_checker: Checker) -> GameState {
        let mut state = GameState::initial(starting_checker);
        loop {
            self.renderer.render(&state);
            if state.game_over() {
                break;
            }
            let player = if state.current_checker() == self.player1.checker() {
                &mut self.player1
            } else {
                &mut self.player2
            };
            match player.make_move(&state) {
                Ok(next) => state = next,
                Err(MoveError::NoMoveAvailable) => {
                    tracing::warn!("player gave up without a move, ending the game");
                    break;
                }
                Err(err) => {
                    tracing::warn!(%err, "move rejected");
                    if let Some(handler) = &mut self.error_handler {
                        handler(&err);
                    }
                }
            }
        }
        match state.winner() {
            Some(winner) => tracing::info!(%winner, "game over"),
            None if state.tie() => tracing::info!("game over: tie"),
            None => tracing::info!("game abandoned"),
        }
        state
    }
}
