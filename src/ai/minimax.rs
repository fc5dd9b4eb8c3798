//! Minimax search with alpha-beta pruning over the game's Move relation.
//!
//! The perspective checker is bound once at the root to whichever side
//! requested the search; terminal and heuristic scores are always taken
//! from that fixed point of view while the min/max role alternates per ply.

use std::time::Duration;

use crate::game::{Checker, GameState, Move};

use super::player::{think_pause, Player};

/// Default look-ahead in plies. A fixed configuration value; there is no
/// time budget or iterative deepening.
pub const DEFAULT_DEPTH: usize = 3;

/// Find the strongest move at [`DEFAULT_DEPTH`].
pub fn find_best_move(state: &GameState) -> Option<Move> {
    find_best_move_at_depth(state, DEFAULT_DEPTH)
}

/// Find the move with the maximal search score, or `None` on a finished
/// game. On an untouched board the opening move is drawn at random: no
/// meaningful asymmetry exists yet and it saves the most expensive ply.
/// Ties between equally scored moves go to the lowest column (stable max).
pub fn find_best_move_at_depth(state: &GameState, depth: usize) -> Option<Move> {
    if state.game_over() {
        return None;
    }
    if state.game_not_started() {
        return state.make_random_move();
    }

    let perspective = state.current_checker();
    let mut best: Option<(Move, i32)> = None;
    for mv in state.possible_moves() {
        let score = minimax_score(&mv, perspective, depth, i32::MIN, i32::MAX, false);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((mv, score)),
        }
    }
    best.map(|(mv, score)| {
        tracing::debug!(column = mv.column, score, depth, "minimax picked a move");
        mv
    })
}

/// Recursively score a move for the fixed `perspective` checker. Terminal
/// positions score exactly; positions at the depth limit score by
/// heuristic; everything else folds over the children with max/min and
/// prunes once `alpha >= beta`.
pub fn minimax_score(
    mv: &Move,
    perspective: Checker,
    depth: usize,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
) -> i32 {
    let state = &mv.after_state;
    if state.game_over() {
        return state
            .evaluate_terminal_score(perspective)
            .expect("state is terminal");
    }
    if depth == 0 {
        return state.score_position(perspective);
    }

    if maximizing {
        let mut value = i32::MIN;
        for next in state.possible_moves() {
            value = value.max(minimax_score(&next, perspective, depth - 1, alpha, beta, false));
            alpha = alpha.max(value);
            if alpha >= beta {
                break;
            }
        }
        value
    } else {
        let mut value = i32::MAX;
        for next in state.possible_moves() {
            value = value.min(minimax_score(&next, perspective, depth - 1, alpha, beta, true));
            beta = beta.min(value);
            if alpha >= beta {
                break;
            }
        }
        value
    }
}

/// A player backed by the alpha-beta search.
pub struct MinimaxPlayer {
    checker: Checker,
    depth: usize,
    delay: Duration,
}

impl MinimaxPlayer {
    pub fn new(checker: Checker) -> Self {
        MinimaxPlayer {
            checker,
            depth: DEFAULT_DEPTH,
            delay: Duration::ZERO,
        }
    }

    pub fn with_settings(checker: Checker, depth: usize, delay: Duration) -> Self {
        MinimaxPlayer {
            checker,
            depth,
            delay,
        }
    }
}

impl Player for MinimaxPlayer {
    fn checker(&self) -> Checker {
        self.checker
    }

    fn get_move(&mut self, state: &GameState) -> Option<Move> {
        think_pause(self.delay);
        find_best_move_at_depth(state, self.depth)
    }
}
