//! The per-frame snapshot consumed by the renderer.
//!
//! A [`BoardView`] borrows the caller's board state and is validated once at
//! construction: cells must be supplied row-major with matching positions,
//! and every note, highlight, and the selection must lie inside the grid.
//! The drawing pipeline can then index without bounds concerns.

use polyku_core::{Cell, CellPos, GridSize, Note};

bitflags::bitflags! {
    /// Render and interaction toggles for a board frame.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct BoardFlags: u8 {
        /// Highlight every cell sharing the selected cell's value.
        const IDENTICAL_HIGHLIGHT = 0b0000_0001;
        /// Tint rule-violating digits with the error color.
        const ERROR_HIGHLIGHT = 0b0000_0010;
        /// Draw low-alpha row/column bands through the selection.
        const POSITION_LINES = 0b0000_0100;
        /// Mask every filled value behind a placeholder glyph.
        const QUESTIONS = 0b0000_1000;
        /// Draw candidate notes.
        const RENDER_NOTES = 0b0001_0000;
    }
}

impl Default for BoardFlags {
    fn default() -> Self {
        Self::IDENTICAL_HIGHLIGHT
            | Self::ERROR_HIGHLIGHT
            | Self::POSITION_LINES
            | Self::RENDER_NOTES
    }
}

/// Errors detected when validating a board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ViewError {
    /// The cell slice does not hold `n * n` cells.
    #[display("expected {expected} cells, got {actual}")]
    CellCountMismatch {
        /// `n * n` for the grid size.
        expected: usize,
        /// Number of cells supplied.
        actual: usize,
    },
    /// A cell's stored position disagrees with its row-major slot.
    #[display("cell at index {index} carries position {pos}")]
    MisplacedCell {
        /// Row-major index of the offending cell.
        index: usize,
        /// The position the cell claims.
        pos: CellPos,
    },
    /// A cell value exceeds the grid size.
    #[display("cell {pos} holds value {value}, grid size is {size}")]
    CellValueOutOfRange {
        /// Position of the offending cell.
        pos: CellPos,
        /// The offending value.
        value: u8,
        /// The grid size.
        size: GridSize,
    },
    /// A note lies outside the grid or carries an invalid candidate.
    #[display("note {value} at {pos} invalid for grid size {size}")]
    InvalidNote {
        /// Position of the offending note.
        pos: CellPos,
        /// The candidate value.
        value: u8,
        /// The grid size.
        size: GridSize,
    },
    /// The selection or a highlight position lies outside the grid.
    #[display("position {pos} outside grid of size {size}")]
    PositionOutOfBounds {
        /// The offending position.
        pos: CellPos,
        /// The grid size.
        size: GridSize,
    },
}

/// A validated, read-only snapshot of one board frame.
#[derive(Debug, Clone)]
pub struct BoardView<'a> {
    size: GridSize,
    cells: &'a [Cell],
    notes: &'a [Note],
    selected: Option<CellPos>,
    highlighted: &'a [CellPos],
    flags: BoardFlags,
}

impl<'a> BoardView<'a> {
    /// Builds a snapshot with the default flags.
    ///
    /// `cells` must hold `n * n` cells in row-major order, each carrying its
    /// own position.
    ///
    /// # Errors
    ///
    /// Returns a [`ViewError`] describing the first malformed cell, note,
    /// highlight, or selection encountered.
    pub fn new(
        size: GridSize,
        cells: &'a [Cell],
        notes: &'a [Note],
        selected: Option<CellPos>,
        highlighted: &'a [CellPos],
    ) -> Result<Self, ViewError> {
        Self::with_flags(size, cells, notes, selected, highlighted, BoardFlags::default())
    }

    /// Builds a snapshot with explicit flags.
    ///
    /// # Errors
    ///
    /// Same contract as [`BoardView::new`].
    pub fn with_flags(
        size: GridSize,
        cells: &'a [Cell],
        notes: &'a [Note],
        selected: Option<CellPos>,
        highlighted: &'a [CellPos],
        flags: BoardFlags,
    ) -> Result<Self, ViewError> {
        let n = usize::from(size.get());
        if cells.len() != n * n {
            return Err(ViewError::CellCountMismatch {
                expected: n * n,
                actual: cells.len(),
            });
        }
        for ((index, cell), expected) in cells.iter().enumerate().zip(size.positions()) {
            if cell.pos != expected {
                return Err(ViewError::MisplacedCell {
                    index,
                    pos: cell.pos,
                });
            }
            if cell.value != 0 && !size.contains_value(cell.value) {
                return Err(ViewError::CellValueOutOfRange {
                    pos: cell.pos,
                    value: cell.value,
                    size,
                });
            }
        }
        for note in notes {
            if !note.pos.is_inside(size) || !size.contains_value(note.value) {
                return Err(ViewError::InvalidNote {
                    pos: note.pos,
                    value: note.value,
                    size,
                });
            }
        }
        for &pos in highlighted.iter().chain(&selected) {
            if !pos.is_inside(size) {
                return Err(ViewError::PositionOutOfBounds { pos, size });
            }
        }
        Ok(Self {
            size,
            cells,
            notes,
            selected,
            highlighted,
            flags,
        })
    }

    /// The grid size of this snapshot.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Cells in row-major order.
    #[must_use]
    pub const fn cells(&self) -> &'a [Cell] {
        self.cells
    }

    /// Candidate notes to draw.
    #[must_use]
    pub const fn notes(&self) -> &'a [Note] {
        self.notes
    }

    /// The selected cell, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<CellPos> {
        self.selected
    }

    /// Externally supplied highlight positions.
    #[must_use]
    pub const fn highlighted(&self) -> &'a [CellPos] {
        self.highlighted
    }

    /// The render toggles for this frame.
    #[must_use]
    pub const fn flags(&self) -> BoardFlags {
        self.flags
    }

    /// Looks up a cell by position.
    #[must_use]
    pub fn cell(&self, pos: CellPos) -> &Cell {
        let n = usize::from(self.size.get());
        &self.cells[usize::from(pos.row) * n + usize::from(pos.col)]
    }
}
