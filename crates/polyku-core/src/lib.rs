//! Core data model for Polyku boards.
//!
//! This crate provides the domain types shared by the board renderer and the
//! application: grid sizes, cell positions, cells, and candidate notes. It
//! has no UI dependencies.
//!
//! # Overview
//!
//! - [`grid_size`]: validated grid dimension with block-subdivision geometry
//! - [`cell`]: positions, cells (value + locked/error flags), and notes
//!
//! # Examples
//!
//! ```
//! use polyku_core::{Cell, CellPos, GridSize};
//!
//! let size = GridSize::NINE;
//! assert_eq!(size.block_rows(), 3);
//! assert_eq!(size.block_cols(), 3);
//!
//! let cell = Cell::given(CellPos::new(2, 3), 5);
//! assert!(cell.locked);
//! assert_eq!(cell.glyph(), Some('5'));
//! ```

pub mod cell;
pub mod grid_size;

pub use self::{
    cell::{Cell, CellPos, Note, symbol_glyph},
    grid_size::GridSize,
};

/// Errors produced when constructing or validating core data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CoreError {
    /// The grid size is outside the representable range (1..=15).
    #[display("unsupported grid size: {_0}")]
    UnsupportedGridSize(#[error(not(source))] u8),
    /// A cell or note value does not fit the grid.
    #[display("value {value} out of range for grid size {size}")]
    ValueOutOfRange {
        /// The offending value.
        value: u8,
        /// The grid dimension the value was checked against.
        size: u8,
    },
    /// A position lies outside the grid.
    #[display("position ({row}, {col}) out of bounds for grid size {size}")]
    PositionOutOfBounds {
        /// Row of the offending position.
        row: u8,
        /// Column of the offending position.
        col: u8,
        /// The grid dimension the position was checked against.
        size: u8,
    },
}
