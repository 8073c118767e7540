//! The editable puzzle board.

use polyku_core::{Cell, CellPos, GridSize, Note};

/// Errors from [`GameBoard::from_givens`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardParseError {
    /// The text does not hold `n * n` symbols.
    #[display("expected {expected} symbols, got {actual}")]
    BadLength {
        /// `n * n` for the grid size.
        expected: usize,
        /// Number of symbols supplied.
        actual: usize,
    },
    /// A symbol is neither `.` nor a value valid for the grid size.
    #[display("symbol {symbol:?} at index {index} is not valid here")]
    BadSymbol {
        /// Index of the offending symbol.
        index: usize,
        /// The offending symbol.
        symbol: char,
    },
}

/// A board mid-game: givens, player entries, and candidate notes.
///
/// Cells are stored row-major. Every mutation re-derives the per-cell error
/// flags from row, column, and block duplicates, so callers can hand the
/// cell slice straight to the renderer.
#[derive(Debug, Clone)]
pub struct GameBoard {
    size: GridSize,
    cells: Vec<Cell>,
    notes: Vec<Note>,
}

impl GameBoard {
    /// Creates an all-empty board.
    #[must_use]
    pub fn empty(size: GridSize) -> Self {
        Self {
            size,
            cells: size.positions().map(Cell::empty).collect(),
            notes: Vec::new(),
        }
    }

    /// Parses a board from one symbol per cell, row-major.
    ///
    /// `.` is an empty cell; values are uppercase or lowercase hex digits.
    /// Whitespace is ignored. Every parsed value becomes a locked given.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardParseError`] if the symbol count is wrong or a
    /// symbol does not name a value valid for `size`.
    pub fn from_givens(size: GridSize, text: &str) -> Result<Self, BoardParseError> {
        let mut board = Self::empty(size);
        let expected = size.cell_count();
        let mut count = 0;
        for (index, symbol) in text.chars().filter(|c| !c.is_whitespace()).enumerate() {
            if symbol != '.' {
                let value = symbol
                    .to_digit(16)
                    .and_then(|v| u8::try_from(v).ok())
                    .filter(|&v| size.contains_value(v))
                    .ok_or(BoardParseError::BadSymbol { index, symbol })?;
                if let Some(cell) = board.cells.get_mut(index) {
                    *cell = Cell::given(cell.pos, value);
                }
            }
            count += 1;
        }
        if count != expected {
            return Err(BoardParseError::BadLength {
                expected,
                actual: count,
            });
        }
        board.refresh_errors();
        Ok(board)
    }

    /// Creates a board from a sparse list of `(row, col, value)` givens.
    #[must_use]
    pub fn with_givens(size: GridSize, givens: &[(u8, u8, u8)]) -> Self {
        let mut board = Self::empty(size);
        for &(row, col, value) in givens {
            let pos = CellPos::new(row, col);
            if pos.is_inside(size) && size.contains_value(value) {
                *board.cell_mut(pos) = Cell::given(pos, value);
            }
        }
        board.refresh_errors();
        board
    }

    /// The grid size.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Cells in row-major order, error flags current.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// All candidate notes.
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Looks up a cell by position.
    #[must_use]
    pub fn cell(&self, pos: CellPos) -> &Cell {
        &self.cells[self.index(pos)]
    }

    /// How many cells currently hold `value`.
    #[must_use]
    pub fn value_count(&self, value: u8) -> usize {
        self.cells.iter().filter(|c| c.value == value).count()
    }

    /// Whether every cell is filled without rule violations.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty() && !c.error)
    }

    /// Places `value` in the cell at `pos`, dropping that cell's notes.
    ///
    /// Returns `false` (without touching the board) when the cell is locked
    /// or the value is out of range for the grid size.
    pub fn set_value(&mut self, pos: CellPos, value: u8) -> bool {
        if !self.size.contains_value(value) || self.cell(pos).locked {
            return false;
        }
        let index = self.index(pos);
        self.cells[index].value = value;
        self.notes.retain(|n| n.pos != pos);
        self.refresh_errors();
        true
    }

    /// Clears the value and notes at `pos`; leaves locked cells alone.
    pub fn clear_cell(&mut self, pos: CellPos) -> bool {
        if self.cell(pos).locked {
            return false;
        }
        let index = self.index(pos);
        self.cells[index].value = 0;
        self.notes.retain(|n| n.pos != pos);
        self.refresh_errors();
        true
    }

    /// Adds or removes a candidate note at `pos`.
    ///
    /// Notes only live in empty, unlocked cells.
    pub fn toggle_note(&mut self, pos: CellPos, value: u8) -> bool {
        if !self.size.contains_value(value) {
            return false;
        }
        let cell = self.cell(pos);
        if cell.locked || !cell.is_empty() {
            return false;
        }
        let before = self.notes.len();
        self.notes.retain(|n| n.pos != pos || n.value != value);
        if self.notes.len() == before {
            self.notes.push(Note::new(pos, value));
        }
        true
    }

    fn index(&self, pos: CellPos) -> usize {
        usize::from(pos.row) * usize::from(self.size.get()) + usize::from(pos.col)
    }

    fn cell_mut(&mut self, pos: CellPos) -> &mut Cell {
        let index = self.index(pos);
        &mut self.cells[index]
    }

    fn refresh_errors(&mut self) {
        let duplicated: Vec<bool> = self
            .cells
            .iter()
            .map(|cell| cell.value != 0 && self.has_duplicate(cell))
            .collect();
        for (cell, error) in self.cells.iter_mut().zip(duplicated) {
            cell.error = error;
        }
    }

    fn has_duplicate(&self, cell: &Cell) -> bool {
        let block_rows = self.size.block_rows();
        let block_cols = self.size.block_cols();
        self.cells.iter().any(|other| {
            other.pos != cell.pos
                && other.value == cell.value
                && (other.pos.row == cell.pos.row
                    || other.pos.col == cell.pos.col
                    || (other.pos.row / block_rows == cell.pos.row / block_rows
                        && other.pos.col / block_cols == cell.pos.col / block_cols))
        })
    }
}
