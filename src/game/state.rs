use rand::Rng;

use super::{Board, Cell, Checker, COLS, ROWS};
use crate::error::{GameError, MoveError};

/// A board paired with the checker that started the game. All game-status
/// queries derive from this pair; the only way to advance the game is
/// [`GameState::make_move_to`], which produces a fresh state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    starting_checker: Checker,
    // Scanned once at construction; a state never changes afterwards.
    winner: Option<Checker>,
}

/// An immutable record of a single column drop: who moved, where the piece
/// landed, and the states on either side of the transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub checker: Checker,
    pub row: usize,
    pub column: usize,
    pub before_state: GameState,
    pub after_state: GameState,
}

/// Scan step per direction: horizontal, vertical, ascending diagonal,
/// descending diagonal.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

fn has_four_in_a_row(board: &Board, checker: Checker) -> bool {
    let target = checker.to_cell();
    for &(dr, dc) in &DIRECTIONS {
        for row in 0..ROWS as isize {
            for col in 0..COLS as isize {
                let (end_row, end_col) = (row + 3 * dr, col + 3 * dc);
                if end_row < 0 || end_row >= ROWS as isize || end_col >= COLS as isize {
                    continue;
                }
                if (0..4).all(|i| {
                    board.get((row + i * dr) as usize, (col + i * dc) as usize) == target
                }) {
                    return true;
                }
            }
        }
    }
    false
}

impl GameState {
    /// Create the initial state for a game started by `starting_checker`.
    pub fn initial(starting_checker: Checker) -> Self {
        GameState {
            board: Board::new(),
            starting_checker,
            winner: None,
        }
    }

    /// Pair a board with a starting checker, rejecting pairs that no legal
    /// sequence of moves could have produced.
    pub fn new(board: Board, starting_checker: Checker) -> Result<Self, GameError> {
        let yellow = board.yellow_count();
        let red = board.red_count();
        if yellow.abs_diff(red) > 1 {
            return Err(GameError::InvalidGameState(format!(
                "checker counts differ by more than one ({yellow} yellow vs {red} red)"
            )));
        }
        let leader = if yellow > red {
            Some(Checker::Yellow)
        } else if red > yellow {
            Some(Checker::Red)
        } else {
            None
        };
        if let Some(leader) = leader {
            if starting_checker != leader {
                return Err(GameError::InvalidGameState(format!(
                    "{leader} leads the count but {starting_checker} is marked as starting"
                )));
            }
        }
        let state = Self::unchecked(board, starting_checker);
        // A finished line can only belong to the side that made the last
        // move; equivalently, the winner's count leads by one when the
        // winner started the game and is level otherwise.
        if let Some(last) = Self::last_mover(&board, starting_checker) {
            if has_four_in_a_row(&board, last.other()) {
                return Err(GameError::InvalidGameState(format!(
                    "{} holds a four-in-a-row but did not make the last move",
                    last.other()
                )));
            }
        }
        Ok(state)
    }

    /// Internal constructor for transitions that preserve validity.
    fn unchecked(board: Board, starting_checker: Checker) -> Self {
        let winner = Self::last_mover(&board, starting_checker)
            .filter(|&mover| has_four_in_a_row(&board, mover));
        GameState {
            board,
            starting_checker,
            winner,
        }
    }

    /// The checker that placed the most recent piece, if any piece has been
    /// placed. Only this checker can own a freshly completed line.
    fn last_mover(board: &Board, starting_checker: Checker) -> Option<Checker> {
        if board.is_empty() {
            None
        } else if board.yellow_count() == board.red_count() {
            Some(starting_checker.other())
        } else {
            Some(starting_checker)
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn starting_checker(&self) -> Checker {
        self.starting_checker
    }

    /// Whose turn it is: the starting checker when counts are level,
    /// otherwise its other. Turn order follows stone-count parity alone.
    pub fn current_checker(&self) -> Checker {
        if self.board.yellow_count() == self.board.red_count() {
            self.starting_checker
        } else {
            self.starting_checker.other()
        }
    }

    /// True iff no piece has been placed yet.
    pub fn game_not_started(&self) -> bool {
        self.board.is_empty()
    }

    /// The checker owning a four-in-a-row, if one exists.
    pub fn winner(&self) -> Option<Checker> {
        self.winner
    }

    /// No winner and no empty cell left.
    pub fn tie(&self) -> bool {
        self.winner.is_none() && self.board.is_full()
    }

    /// Won or tied; terminal states have no moves.
    pub fn game_over(&self) -> bool {
        self.winner.is_some() || self.board.is_full()
    }

    /// Drop the current checker into `column`. The piece lands on the lowest
    /// empty row, scanning from row 0 (the bottom) upward.
    pub fn make_move_to(&self, column: usize) -> Result<Move, MoveError> {
        if self.board.is_full() {
            return Err(MoveError::BoardFull);
        }
        if column >= COLS {
            return Err(MoveError::InvalidColumn(column));
        }
        let row = (0..ROWS)
            .find(|&row| self.board.get(row, column) == Cell::Empty)
            .ok_or(MoveError::ColumnFull(column))?;
        let checker = self.current_checker();
        let after_state = GameState::unchecked(
            self.board.with_checker_at(row, column, checker),
            self.starting_checker,
        );
        Ok(Move {
            checker,
            row,
            column,
            before_state: *self,
            after_state,
        })
    }

    /// Every move obtainable by dropping into a non-full column, in
    /// ascending column order. Terminal states have no possible moves.
    /// Recomputed fresh from the immutable state on every call.
    pub fn possible_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        if self.game_over() {
            return moves;
        }
        for column in 0..COLS {
            if !self.board.is_column_full(column) {
                let mv = self
                    .make_move_to(column)
                    .expect("non-full column accepts a drop");
                moves.push(mv);
            }
        }
        moves
    }

    /// Uniformly pick one of the possible moves, or `None` when the state
    /// is terminal.
    pub fn make_random_move(&self) -> Option<Move> {
        let mut moves = self.possible_moves();
        if moves.is_empty() {
            return None;
        }
        let index = rand::rng().random_range(0..moves.len());
        Some(moves.swap_remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replay a column sequence from an initial state, asserting each drop
    /// is legal along the way.
    fn replay(starting: Checker, columns: &[usize]) -> GameState {
        let mut state = GameState::initial(starting);
        for &column in columns {
            state = state.make_move_to(column).unwrap().after_state;
        }
        state
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::initial(Checker::Yellow);
        assert_eq!(state.current_checker(), Checker::Yellow);
        assert!(state.game_not_started());
        assert!(!state.game_over());
        assert_eq!(state.winner(), None);
        assert_eq!(state.possible_moves().len(), 7);
    }

    #[test]
    fn test_turn_alternates_by_parity() {
        let state = replay(Checker::Red, &[3]);
        assert_eq!(state.current_checker(), Checker::Yellow);
        let state = state.make_move_to(3).unwrap().after_state;
        assert_eq!(state.current_checker(), Checker::Red);
    }

    #[test]
    fn test_drop_lands_on_lowest_empty_row() {
        let state = GameState::initial(Checker::Yellow);
        let first = state.make_move_to(4).unwrap();
        assert_eq!(first.row, 0);
        assert_eq!(first.column, 4);
        assert_eq!(first.checker, Checker::Yellow);
        // Same column again lands one row higher
        let second = first.after_state.make_move_to(4).unwrap();
        assert_eq!(second.row, 1);
        assert_eq!(second.checker, Checker::Red);
    }

    #[test]
    fn test_move_changes_exactly_one_cell() {
        let state = replay(Checker::Yellow, &[0, 1, 3]);
        for mv in state.possible_moves() {
            let mut changed = 0;
            for row in 0..ROWS {
                for col in 0..COLS {
                    let before = mv.before_state.board().get(row, col);
                    let after = mv.after_state.board().get(row, col);
                    if before != after {
                        changed += 1;
                        assert_eq!(before, Cell::Empty);
                        assert_eq!(after, mv.checker.to_cell());
                        assert_eq!((row, col), (mv.row, mv.column));
                    }
                }
            }
            assert_eq!(changed, 1);
        }
    }

    #[test]
    fn test_move_to_full_column_fails() {
        let mut state = GameState::initial(Checker::Yellow);
        for _ in 0..ROWS {
            state = state.make_move_to(6).unwrap().after_state;
        }
        assert_eq!(state.make_move_to(6), Err(MoveError::ColumnFull(6)));
    }

    #[test]
    fn test_move_to_bad_column_fails() {
        let state = GameState::initial(Checker::Yellow);
        assert_eq!(state.make_move_to(7), Err(MoveError::InvalidColumn(7)));
    }

    #[test]
    fn test_possible_moves_skip_full_columns() {
        let mut state = GameState::initial(Checker::Yellow);
        for _ in 0..ROWS {
            state = state.make_move_to(0).unwrap().after_state;
        }
        let moves = state.possible_moves();
        assert_eq!(moves.len(), 6);
        let columns: Vec<usize> = moves.iter().map(|mv| mv.column).collect();
        assert_eq!(columns, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_horizontal_win() {
        // Yellow fills row 0, columns 0..=3; Red answers on row 1
        let state = replay(Checker::Yellow, &[0, 0, 1, 1, 2, 2, 3]);
        assert_eq!(state.winner(), Some(Checker::Yellow));
        assert!(state.game_over());
        assert!(!state.tie());
        assert!(state.possible_moves().is_empty());
    }

    #[test]
    fn test_vertical_win() {
        let state = replay(Checker::Yellow, &[2, 3, 2, 3, 2, 3, 2]);
        assert_eq!(state.winner(), Some(Checker::Yellow));
    }

    #[test]
    fn test_ascending_diagonal_win() {
        let state = replay(
            Checker::Yellow,
            &[0, 1, 1, 2, 2, 3, 2, 3, 3, 6, 3],
        );
        assert_eq!(state.winner(), Some(Checker::Yellow));
    }

    #[test]
    fn test_descending_diagonal_win() {
        let state = replay(
            Checker::Yellow,
            &[6, 5, 5, 4, 4, 3, 4, 3, 3, 0, 3],
        );
        assert_eq!(state.winner(), Some(Checker::Yellow));
    }

    #[test]
    fn test_win_belongs_to_last_mover() {
        // Red (second to move) completes a vertical line
        let state = replay(Checker::Yellow, &[0, 6, 1, 6, 0, 6, 1, 6]);
        assert_eq!(state.winner(), Some(Checker::Red));
        assert_eq!(state.current_checker(), Checker::Yellow);
    }

    #[test]
    fn test_constructed_winning_position() {
        // Yellow owns row 0, columns 0..=3; Red has answered three times
        let grid = [
            [1, 1, 1, 1, 0, 0, 0],
            [2, 2, 2, 0, 0, 0, 0],
            [0; COLS],
            [0; COLS],
            [0; COLS],
            [0; COLS],
        ];
        let board = Board::from_grid(grid).unwrap();
        let state = GameState::new(board, Checker::Yellow).unwrap();
        assert_eq!(state.winner(), Some(Checker::Yellow));
        assert!(state.game_over());
    }

    /// Full board with no four-in-a-row for either side, 21 checkers each.
    fn tied_grid() -> [[u8; COLS]; ROWS] {
        [
            [1, 2, 1, 2, 1, 2, 1],
            [1, 2, 1, 2, 1, 2, 1],
            [2, 1, 2, 1, 2, 1, 2],
            [2, 1, 2, 1, 2, 1, 2],
            [1, 2, 1, 2, 1, 2, 1],
            [2, 1, 2, 1, 2, 1, 2],
        ]
    }

    #[test]
    fn test_tie_on_full_board() {
        let board = Board::from_grid(tied_grid()).unwrap();
        let state = GameState::new(board, Checker::Yellow).unwrap();
        assert_eq!(state.winner(), None);
        assert!(state.tie());
        assert!(state.game_over());
        assert!(state.possible_moves().is_empty());
        assert_eq!(state.make_move_to(0), Err(MoveError::BoardFull));
        assert_eq!(state.make_random_move(), None);
    }

    #[test]
    fn test_rejects_unbalanced_counts() {
        // Four yellow drops with no red answer cannot come from legal play
        let grid = [
            [1, 1, 1, 1, 0, 0, 0],
            [0; COLS],
            [0; COLS],
            [0; COLS],
            [0; COLS],
            [0; COLS],
        ];
        let board = Board::from_grid(grid).unwrap();
        assert!(matches!(
            GameState::new(board, Checker::Yellow),
            Err(GameError::InvalidGameState(_))
        ));
    }

    #[test]
    fn test_rejects_wrong_starting_checker() {
        // Yellow leads the count, so Yellow must have started
        let grid = [
            [1, 2, 1, 0, 0, 0, 0],
            [0; COLS],
            [0; COLS],
            [0; COLS],
            [0; COLS],
            [0; COLS],
        ];
        let board = Board::from_grid(grid).unwrap();
        assert!(GameState::new(board, Checker::Yellow).is_ok());
        assert!(matches!(
            GameState::new(board, Checker::Red),
            Err(GameError::InvalidGameState(_))
        ));
    }

    #[test]
    fn test_rejects_winner_who_did_not_move_last() {
        // Yellow has a line but the counts are level, which is impossible
        // when Yellow started: the winner always owns the last move.
        let grid = [
            [1, 1, 1, 1, 2, 2, 0],
            [2, 2, 0, 0, 0, 0, 0],
            [0; COLS],
            [0; COLS],
            [0; COLS],
            [0; COLS],
        ];
        let board = Board::from_grid(grid).unwrap();
        assert_eq!(board.yellow_count(), board.red_count());
        assert!(matches!(
            GameState::new(board, Checker::Yellow),
            Err(GameError::InvalidGameState(_))
        ));
    }

    #[test]
    fn test_reachable_states_stay_balanced() {
        let mut state = GameState::initial(Checker::Red);
        let mut turn = 0;
        while !state.game_over() && turn < 42 {
            let mv = state.make_random_move().unwrap();
            state = mv.after_state;
            let board = state.board();
            assert!(board.yellow_count().abs_diff(board.red_count()) <= 1);
            assert_eq!(
                board.yellow_count() + board.red_count() + board.empty_count(),
                42
            );
            turn += 1;
        }
    }

    #[test]
    fn test_random_move_is_possible_move() {
        let state = replay(Checker::Yellow, &[3, 3, 4]);
        let possible = state.possible_moves();
        for _ in 0..50 {
            let mv = state.make_random_move().unwrap();
            assert!(possible.contains(&mv));
        }
    }

    #[test]
    fn test_possible_moves_is_deterministic() {
        let state = replay(Checker::Yellow, &[0, 1, 2]);
        assert_eq!(state.possible_moves(), state.possible_moves());
    }
}
