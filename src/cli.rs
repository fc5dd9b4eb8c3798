//! Command-line wiring: which strategy plays each side and who starts.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::ai::{MinimaxPlayer, Player, RandomPlayer};
use crate::config::AppConfig;
use crate::console::ConsolePlayer;
use crate::game::Checker;

#[derive(Debug, Parser)]
#[command(name = "connect-four", about = "Connect Four with an alpha-beta minimax opponent")]
pub struct Cli {
    /// Strategy playing the yellow checkers
    #[arg(short = 'y', long, value_enum, default_value_t = PlayerKind::Human)]
    pub yellow: PlayerKind,

    /// Strategy playing the red checkers
    #[arg(short = 'r', long, value_enum, default_value_t = PlayerKind::Minimax)]
    pub red: PlayerKind,

    /// Checker that makes the first move
    #[arg(short = 's', long, value_enum, default_value_t = StartingChecker::Yellow)]
    pub starting: StartingChecker,

    /// Path to a TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    pub config: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlayerKind {
    Human,
    Random,
    Minimax,
}

impl PlayerKind {
    pub fn build(self, checker: Checker, config: &AppConfig) -> Box<dyn Player> {
        let delay = Duration::from_millis(config.bot_delay_ms);
        match self {
            PlayerKind::Human => Box::new(ConsolePlayer::new(checker)),
            PlayerKind::Random => Box::new(RandomPlayer::with_delay(checker, delay)),
            PlayerKind::Minimax => Box::new(MinimaxPlayer::with_settings(
                checker,
                config.search_depth,
                delay,
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StartingChecker {
    Yellow,
    Red,
}

impl StartingChecker {
    pub fn checker(self) -> Checker {
        match self {
            StartingChecker::Yellow => Checker::Yellow,
            StartingChecker::Red => Checker::Red,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["connect-four"]).unwrap();
        assert_eq!(cli.yellow, PlayerKind::Human);
        assert_eq!(cli.red, PlayerKind::Minimax);
        assert_eq!(cli.starting.checker(), Checker::Yellow);
    }

    #[test]
    fn test_parse_player_kinds() {
        let cli =
            Cli::try_parse_from(["connect-four", "--yellow", "random", "--red", "human"]).unwrap();
        assert_eq!(cli.yellow, PlayerKind::Random);
        assert_eq!(cli.red, PlayerKind::Human);
    }

    #[test]
    fn test_parse_starting_checker() {
        let cli = Cli::try_parse_from(["connect-four", "-s", "red"]).unwrap();
        assert_eq!(cli.starting.checker(), Checker::Red);
    }

    #[test]
    fn test_rejects_unknown_kind() {
        assert!(Cli::try_parse_from(["connect-four", "--yellow", "alphazero"]).is_err());
    }
}
