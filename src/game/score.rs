//! Position scoring: exact values for terminal states and a sliding-window
//! heuristic for everything the search cannot afford to expand.

use super::{Checker, GameState, COLS, ROWS};
use crate::error::GameError;

/// Sentinel score for a decided game, far outside heuristic range.
pub const WIN_SCORE: i32 = 9_999_999;

/// Column whose cells earn a flat bonus; controlling it crosses the most
/// potential lines.
const CENTER_COLUMN: usize = 3;

/// Score one window of four cells by its composition.
fn score_window(own: usize, opponent: usize, empty: usize) -> i32 {
    let mut score = 0;
    if own == 4 {
        score += 100;
    } else if own == 3 && empty == 1 {
        score += 5;
    } else if own == 2 && empty == 2 {
        score += 2;
    }
    if opponent == 3 && empty == 1 {
        score -= 4;
    }
    score
}

impl GameState {
    /// Exact score of a finished game from `perspective`'s point of view:
    /// zero for a tie, [`WIN_SCORE`] for a win, its negation for a loss.
    /// Calling this on a live game is a caller-side logic error.
    pub fn evaluate_terminal_score(&self, perspective: Checker) -> Result<i32, GameError> {
        if !self.game_over() {
            return Err(GameError::UnknownGameScore);
        }
        if self.tie() {
            return Ok(0);
        }
        if self.winner() == Some(perspective) {
            Ok(WIN_SCORE)
        } else {
            Ok(-WIN_SCORE)
        }
    }

    /// Heuristic value of a live position for `perspective`: every
    /// length-4 window along rows, columns and both diagonals is tallied
    /// and scored, plus a bonus per own cell in the center column. The
    /// value is one-sided; the minimizing branch re-invokes it from the
    /// same fixed perspective rather than negating.
    pub fn score_position(&self, perspective: Checker) -> i32 {
        let board = self.board();
        let own_cell = perspective.to_cell();
        let opponent_cell = perspective.other().to_cell();
        let mut score = 0;

        // Center column bonus
        for row in 0..ROWS {
            if board.get(row, CENTER_COLUMN) == own_cell {
                score += 5;
            }
        }

        let tally = |cells: [(usize, usize); 4]| {
            let mut own = 0;
            let mut opponent = 0;
            let mut empty = 0;
            for (row, col) in cells {
                match board.get(row, col) {
                    c if c == own_cell => own += 1,
                    c if c == opponent_cell => opponent += 1,
                    _ => empty += 1,
                }
            }
            score_window(own, opponent, empty)
        };

        // Horizontal
        for row in 0..ROWS {
            for col in 0..COLS - 3 {
                score += tally([(row, col), (row, col + 1), (row, col + 2), (row, col + 3)]);
            }
        }

        // Vertical
        for col in 0..COLS {
            for row in 0..ROWS - 3 {
                score += tally([(row, col), (row + 1, col), (row + 2, col), (row + 3, col)]);
            }
        }

        // Ascending diagonal
        for row in 0..ROWS - 3 {
            for col in 0..COLS - 3 {
                score += tally([
                    (row, col),
                    (row + 1, col + 1),
                    (row + 2, col + 2),
                    (row + 3, col + 3),
                ]);
            }
        }

        // Descending diagonal
        for row in 0..ROWS - 3 {
            for col in 0..COLS - 3 {
                score += tally([
                    (row + 3, col),
                    (row + 2, col + 1),
                    (row + 1, col + 2),
                    (row, col + 3),
                ]);
            }
        }

        score
    }
}
