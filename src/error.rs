//! Structured error types for the game core.

/// Errors raised when constructing or scoring game values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid board: cell at row {row}, column {column} holds tag {value}, expected 0, 1 or 2")]
    InvalidBoard { row: usize, column: usize, value: u8 },

    #[error("invalid game state: {0}")]
    InvalidGameState(String),

    #[error("invalid move: {0}")]
    InvalidMove(#[from] MoveError),

    #[error("game is not over yet")]
    UnknownGameScore,
}

/// Errors raised when a move cannot be made. Player strategies are expected
/// to recover from these locally (re-prompt or re-select) rather than
/// propagate them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range (0..7)")]
    InvalidColumn(usize),

    #[error("column {0} is already full")]
    ColumnFull(usize),

    #[error("no empty cells left on the board")]
    BoardFull,

    #[error("no move available in this position")]
    NoMoveAvailable,

    #[error("it is the other player's turn")]
    OutOfTurn,
}

/// Errors raised when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    FileRead {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_board_display() {
        let err = GameError::InvalidBoard {
            row: 2,
            column: 5,
            value: 9,
        };
        assert_eq!(
            err.to_string(),
            "invalid board: cell at row 2, column 5 holds tag 9, expected 0, 1 or 2"
        );
    }

    #[test]
    fn test_move_error_wraps_into_game_error() {
        let err: GameError = MoveError::ColumnFull(3).into();
        assert_eq!(err.to_string(), "invalid move: column 3 is already full");
    }

    #[test]
    fn test_unknown_game_score_display() {
        assert_eq!(
            GameError::UnknownGameScore.to_string(),
            "game is not over yet"
        );
    }
}
