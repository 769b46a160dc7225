use crate::error::BoardError;

/// Number of consecutive tokens required to win.
pub const WIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

/// The game grid. Dimensions are fixed at construction; an accepted
/// placement flips exactly one cell from Empty to a token and is never
/// reverted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidDimension { rows, cols });
        }
        Ok(Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check whether a coordinate lies on the board.
    pub fn is_in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Get the cell at a specific position.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        if !self.is_in_bounds(row, col) {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(self.cells[row * self.cols + col])
    }

    /// A move is legal iff the target cell exists and is empty. Every
    /// placement must pass this gate.
    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Ok(Cell::Empty))
    }

    /// Place a token at (row, col). The board re-checks bounds and
    /// emptiness rather than trusting the caller.
    pub fn place(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), BoardError> {
        match self.get(row, col)? {
            Cell::Empty => {
                self.cells[row * self.cols + col] = cell;
                Ok(())
            }
            _ => Err(BoardError::CellOccupied { row, col }),
        }
    }

    /// Check if the board is completely full.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// Check if the token at (row, col) sits on a horizontal or vertical
    /// four-in-a-row. Diagonal runs do not count in this ruleset.
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let Ok(cell) = self.get(row, col) else {
            return false;
        };
        if cell == Cell::Empty {
            return false;
        }

        // The winning run may extend to either side of the placed token,
        // so the scans cover the entire row and the entire column.
        self.check_line(row, 0, 0, 1, self.cols, cell)
            || self.check_line(0, col, 1, 0, self.rows, cell)
    }

    /// Walk `len` positions from the start along the step vector, counting
    /// consecutive cells that match `target`. Any break resets the count.
    fn check_line(
        &self,
        start_row: usize,
        start_col: usize,
        step_row: usize,
        step_col: usize,
        len: usize,
        target: Cell,
    ) -> bool {
        let mut count = 0;
        for i in 0..len {
            let row = start_row + i * step_row;
            let col = start_col + i * step_col;
            if self.get(row, col) == Ok(target) {
                count += 1;
                if count == WIN_LENGTH {
                    return true;
                }
            } else {
                count = 0;
            }
        }
        false
    }

    /// Render the grid as display lines: each cell as `" | <char>"` with a
    /// trailing `" |"`, each row followed by a dash separator. Empty cells
    /// render as a space.
    pub fn render_lines(&self, one: char, two: char) -> Vec<String> {
        let separator = "-".repeat(self.cols * 4 - 1);
        let mut lines = Vec::with_capacity(self.rows * 2);
        for row in 0..self.rows {
            let mut line = String::new();
            for col in 0..self.cols {
                let ch = match self.cells[row * self.cols + col] {
                    Cell::Empty => ' ',
                    Cell::PlayerOne => one,
                    Cell::PlayerTwo => two,
                };
                line.push_str(" | ");
                line.push(ch);
            }
            line.push_str(" |");
            lines.push(line);
            lines.push(separator.clone());
        }
        lines
    }
}
