//! Cells, positions, and candidate notes.

use std::fmt::{self, Display};

use crate::GridSize;

/// A (row, column) position within a grid.
///
/// Both coordinates are zero-based. A position is only meaningful relative to
/// a [`GridSize`]; use [`CellPos::is_inside`] to validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellPos {
    /// Zero-based row index.
    pub row: u8,
    /// Zero-based column index.
    pub col: u8,
}

impl CellPos {
    /// Creates a position from row and column indices.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns whether this position lies inside a grid of the given size.
    #[must_use]
    pub const fn is_inside(self, size: GridSize) -> bool {
        self.row < size.get() && self.col < size.get()
    }
}

impl Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One cell of the puzzle grid.
///
/// The position is fixed; value and flags are mutable board state owned by
/// the caller. The renderer only reads a snapshot per draw.
///
/// # Examples
///
/// ```
/// use polyku_core::{Cell, CellPos};
///
/// let empty = Cell::empty(CellPos::new(0, 0));
/// assert!(empty.is_empty());
/// assert_eq!(empty.glyph(), None);
///
/// let given = Cell::given(CellPos::new(1, 2), 12);
/// assert!(given.locked);
/// assert_eq!(given.glyph(), Some('C')); // values render as uppercase hex
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Position of the cell within its grid.
    pub pos: CellPos,
    /// The cell's symbol: 0 = empty, 1..=n otherwise.
    pub value: u8,
    /// Pre-filled (given) cells cannot be edited by the player.
    pub locked: bool,
    /// Set when the value violates the puzzle constraints.
    pub error: bool,
}

impl Cell {
    /// Creates a player-editable cell with the given value.
    #[must_use]
    pub const fn new(pos: CellPos, value: u8) -> Self {
        Self {
            pos,
            value,
            locked: false,
            error: false,
        }
    }

    /// Creates an empty, editable cell.
    #[must_use]
    pub const fn empty(pos: CellPos) -> Self {
        Self::new(pos, 0)
    }

    /// Creates a locked (given) cell.
    #[must_use]
    pub const fn given(pos: CellPos, value: u8) -> Self {
        Self {
            pos,
            value,
            locked: true,
            error: false,
        }
    }

    /// Returns whether the cell holds no value.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value == 0
    }

    /// Returns the display glyph for the cell's value, if any.
    #[must_use]
    pub fn glyph(&self) -> Option<char> {
        symbol_glyph(self.value)
    }
}

/// A candidate-value annotation attached to a cell.
///
/// Multiple notes may share a position, one per candidate value. Notes are
/// independent of the cell's actual value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    /// Position of the annotated cell.
    pub pos: CellPos,
    /// The candidate value (1..=n).
    pub value: u8,
}

impl Note {
    /// Creates a note for a candidate value at a position.
    #[must_use]
    pub const fn new(pos: CellPos, value: u8) -> Self {
        Self { pos, value }
    }

    /// Returns the display glyph for the candidate value, if any.
    #[must_use]
    pub fn glyph(&self) -> Option<char> {
        symbol_glyph(self.value)
    }
}

/// Maps a symbol value to its display glyph.
///
/// Values 1..=15 render as a single uppercase hexadecimal character (`1`-`9`,
/// then `A`-`F`); 0 (empty) and anything above 15 have no glyph.
///
/// # Examples
///
/// ```
/// use polyku_core::symbol_glyph;
///
/// assert_eq!(symbol_glyph(9), Some('9'));
/// assert_eq!(symbol_glyph(10), Some('A'));
/// assert_eq!(symbol_glyph(0), None);
/// assert_eq!(symbol_glyph(16), None);
/// ```
#[must_use]
pub fn symbol_glyph(value: u8) -> Option<char> {
    if value == 0 {
        return None;
    }
    char::from_digit(u32::from(value), 16).map(|c| c.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_constructors() {
        let pos = CellPos::new(3, 4);
        let cell = Cell::new(pos, 7);
        assert_eq!(cell.pos, pos);
        assert_eq!(cell.value, 7);
        assert!(!cell.locked);
        assert!(!cell.error);

        assert!(Cell::empty(pos).is_empty());
        assert!(Cell::given(pos, 1).locked);
    }

    #[test]
    fn test_position_bounds() {
        assert!(CellPos::new(0, 0).is_inside(GridSize::SIX));
        assert!(CellPos::new(5, 5).is_inside(GridSize::SIX));
        assert!(!CellPos::new(6, 0).is_inside(GridSize::SIX));
        assert!(!CellPos::new(0, 6).is_inside(GridSize::SIX));
    }

    #[test]
    fn test_symbol_glyphs_are_uppercase_hex() {
        assert_eq!(symbol_glyph(1), Some('1'));
        assert_eq!(symbol_glyph(9), Some('9'));
        assert_eq!(symbol_glyph(12), Some('C'));
        assert_eq!(symbol_glyph(15), Some('F'));
        assert_eq!(symbol_glyph(0), None);
        assert_eq!(symbol_glyph(16), None);

        assert_eq!(Note::new(CellPos::new(0, 0), 11).glyph(), Some('B'));
    }
}
