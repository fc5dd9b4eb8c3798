use std::io::{self, BufRead, Write};

use crate::ai::Player;
use crate::error::MoveError;
use crate::game::{Checker, GameState, Move};

/// A human player prompted on stdin for a 1-based column number.
/// Bad input and full columns re-prompt; end of input gives up the move.
pub struct ConsolePlayer {
    checker: Checker,
}

impl ConsolePlayer {
    pub fn new(checker: Checker) -> Self {
        ConsolePlayer { checker }
    }
}

fn read_column(checker: Checker) -> Option<usize> {
    let stdin = io::stdin();
    loop {
        print!("{checker}'s move (1-7): ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        if stdin.lock().read_line(&mut line).ok()? == 0 {
            return None;
        }
        match line.trim().parse::<usize>() {
            Ok(column) if (1..=7).contains(&column) => return Some(column - 1),
            _ => println!("Please enter a number from 1 to 7"),
        }
    }
}

impl Player for ConsolePlayer {
    fn checker(&self) -> Checker {
        self.checker
    }

    fn get_move(&mut self, state: &GameState) -> Option<Move> {
        while !state.game_over() {
            let column = read_column(self.checker)?;
            match state.make_move_to(column) {
                Ok(mv) => return Some(mv),
                Err(MoveError::ColumnFull(_)) => println!("That column is already full"),
                Err(err) => {
                    tracing::warn!(%err, "console move rejected");
                    println!("That move is not possible");
                }
            }
        }
        None
    }
}
