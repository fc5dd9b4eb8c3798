use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use crate::engine::Renderer;
use crate::game::{Cell, Checker, GameState, COLS, ROWS};

const FRAME_LINE: &str = "+---+---+---+---+---+---+---+\n";

fn checker_color(checker: Checker) -> Color {
    match checker {
        Checker::Yellow => Color::Yellow,
        Checker::Red => Color::Red,
    }
}

/// Clears the screen and draws the grid top row first, followed by the
/// outcome once the game is over.
pub struct ConsoleRenderer;

impl ConsoleRenderer {
    pub fn new() -> Self {
        ConsoleRenderer
    }

    fn draw(&self, state: &GameState) -> io::Result<()> {
        let mut out = io::stdout();
        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        queue!(out, Print("  1   2   3   4   5   6   7\n"))?;
        for row in (0..ROWS).rev() {
            queue!(out, Print(FRAME_LINE))?;
            for col in 0..COLS {
                queue!(out, Print("| "))?;
                match state.board().get(row, col) {
                    Cell::Yellow => queue!(
                        out,
                        SetForegroundColor(Color::Yellow),
                        Print("●"),
                        ResetColor
                    )?,
                    Cell::Red => {
                        queue!(out, SetForegroundColor(Color::Red), Print("●"), ResetColor)?
                    }
                    Cell::Empty => queue!(out, Print(" "))?,
                }
                queue!(out, Print(" "))?;
            }
            queue!(out, Print("|\n"))?;
        }
        queue!(out, Print(FRAME_LINE))?;
        if let Some(winner) = state.winner() {
            queue!(
                out,
                SetForegroundColor(checker_color(winner)),
                Print(winner.name()),
                ResetColor,
                Print(" wins \u{1F389}\n")
            )?;
        } else if state.tie() {
            queue!(out, Print("No one wins this round \u{1F610}\n"))?;
        }
        out.flush()
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for ConsoleRenderer {
    fn render(&mut self, state: &GameState) {
        if let Err(err) = self.draw(state) {
            tracing::warn!(%err, "failed to draw the board");
        }
    }
}
