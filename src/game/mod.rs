//! Core Connect Four game logic: checkers, the immutable board, and the
//! game-state machine whose only transition is a column drop.

mod board;
mod score;
mod state;

pub use board::{Board, Cell, Checker, CELL_COUNT, COLS, ROWS};
pub use score::WIN_SCORE;
pub use state::{GameState, Move};
