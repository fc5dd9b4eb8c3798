//! Player strategies: the strategy trait, a random mover, and the
//! search-backed bot.

mod minimax;
mod player;
mod random;

pub use minimax::{find_best_move, find_best_move_at_depth, minimax_score, MinimaxPlayer, DEFAULT_DEPTH};
pub use player::Player;
pub use random::RandomPlayer;
