use crate::error::GameError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const CELL_COUNT: usize = ROWS * COLS;

/// A player's piece color. Yellow carries tag 1, Red tag 2; tag 0 is
/// reserved for empty cells and never assigned to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Checker {
    Yellow,
    Red,
}

impl Checker {
    /// Get the other checker
    pub fn other(self) -> Checker {
        match self {
            Checker::Yellow => Checker::Red,
            Checker::Red => Checker::Yellow,
        }
    }

    /// Convert checker to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Checker::Yellow => Cell::Yellow,
            Checker::Red => Cell::Red,
        }
    }

    /// Get checker name for display
    pub fn name(self) -> &'static str {
        match self {
            Checker::Yellow => "Yellow",
            Checker::Red => "Red",
        }
    }
}

impl std::fmt::Display for Checker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Yellow,
    Red,
}

impl Cell {
    /// Integer tag used in raw grid form: 0 empty, 1 yellow, 2 red.
    pub fn tag(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Yellow => 1,
            Cell::Red => 2,
        }
    }

    fn from_tag(tag: u8) -> Option<Cell> {
        match tag {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Yellow),
            2 => Some(Cell::Red),
            _ => None,
        }
    }
}

/// An immutable 6x7 grid of cells with per-instance checker counts.
/// Row 0 is the bottom row; pieces dropped into a column land on the
/// lowest empty row. There are no mutation operations: a drop is built one
/// level up by copying the grid with one cell changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    yellow: u8,
    red: u8,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
            yellow: 0,
            red: 0,
        }
    }

    /// Build a board from an explicit grid of cells.
    pub fn from_cells(cells: [[Cell; COLS]; ROWS]) -> Self {
        let mut yellow = 0;
        let mut red = 0;
        for row in &cells {
            for cell in row {
                match cell {
                    Cell::Yellow => yellow += 1,
                    Cell::Red => red += 1,
                    Cell::Empty => {}
                }
            }
        }
        Board { cells, yellow, red }
    }

    /// Build a board from raw integer tags (0 empty, 1 yellow, 2 red),
    /// row 0 first (bottom). Any other tag is rejected.
    pub fn from_grid(grid: [[u8; COLS]; ROWS]) -> Result<Self, GameError> {
        let mut cells = [[Cell::Empty; COLS]; ROWS];
        for (row, tags) in grid.iter().enumerate() {
            for (column, &value) in tags.iter().enumerate() {
                cells[row][column] =
                    Cell::from_tag(value).ok_or(GameError::InvalidBoard { row, column, value })?;
            }
        }
        Ok(Board::from_cells(cells))
    }

    /// Get the cell at a specific position.
    /// Row 0 is the bottom, row 5 is the top.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Number of yellow checkers on the board.
    pub fn yellow_count(&self) -> usize {
        self.yellow as usize
    }

    /// Number of red checkers on the board.
    pub fn red_count(&self) -> usize {
        self.red as usize
    }

    /// Number of empty cells on the board.
    pub fn empty_count(&self) -> usize {
        CELL_COUNT - self.yellow as usize - self.red as usize
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[ROWS - 1][col] != Cell::Empty
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Check if the board is completely empty
    pub fn is_empty(&self) -> bool {
        self.empty_count() == CELL_COUNT
    }

    /// Produce a new board with one cell changed to the given checker.
    /// The source cell must be empty; counts carry over with one increment.
    pub(crate) fn with_checker_at(&self, row: usize, col: usize, checker: Checker) -> Board {
        debug_assert_eq!(self.cells[row][col], Cell::Empty);
        let mut cells = self.cells;
        cells[row][col] = checker.to_cell();
        let (mut yellow, mut red) = (self.yellow, self.red);
        match checker {
            Checker::Yellow => yellow += 1,
            Checker::Red => red += 1,
        }
        Board { cells, yellow, red }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
