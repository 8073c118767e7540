//! Grid dimension and block-subdivision geometry.

use std::fmt::{self, Display};

use crate::{CellPos, CoreError};

/// The dimension of a square puzzle grid.
///
/// Polyku supports the classic sizes 6, 9, and 12 directly, and any size in
/// 1..=15 in a degraded mode (symbols render as uppercase hexadecimal, so 15
/// is the largest representable value). Block subdivision is derived from the
/// square root: `floor(sqrt(n))` block rows by `ceil(sqrt(n))` block columns,
/// which yields 2x3 boxes for 6, 3x3 for 9, and 3x4 for 12.
///
/// # Examples
///
/// ```
/// use polyku_core::GridSize;
///
/// assert_eq!(GridSize::SIX.block_rows(), 2);
/// assert_eq!(GridSize::SIX.block_cols(), 3);
/// assert_eq!(GridSize::TWELVE.block_rows(), 3);
/// assert_eq!(GridSize::TWELVE.block_cols(), 4);
///
/// let size = GridSize::new(9).unwrap();
/// assert_eq!(size, GridSize::NINE);
/// assert!(GridSize::new(16).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridSize(u8);

impl GridSize {
    /// A 6x6 grid with 2x3 boxes.
    pub const SIX: Self = Self(6);
    /// The classic 9x9 grid with 3x3 boxes.
    pub const NINE: Self = Self(9);
    /// A 12x12 grid with 3x4 boxes.
    pub const TWELVE: Self = Self(12);

    /// The largest supported dimension (symbols are single hex characters).
    pub const MAX: u8 = 15;

    /// Creates a grid size from its dimension.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnsupportedGridSize`] if `n` is zero or greater
    /// than [`GridSize::MAX`].
    pub fn new(n: u8) -> Result<Self, CoreError> {
        if n == 0 || n > Self::MAX {
            return Err(CoreError::UnsupportedGridSize(n));
        }
        Ok(Self(n))
    }

    /// Returns the dimension as a `u8`.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the number of cells in the grid.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.0 as usize * self.0 as usize
    }

    /// Returns `floor(sqrt(n))`, the number of rows in a block.
    ///
    /// Horizontal thick separators repeat with this cadence.
    #[must_use]
    pub const fn block_rows(self) -> u8 {
        isqrt_floor(self.0)
    }

    /// Returns `ceil(sqrt(n))`, the number of columns in a block.
    ///
    /// Vertical thick separators repeat with this cadence.
    #[must_use]
    pub const fn block_cols(self) -> u8 {
        let floor = isqrt_floor(self.0);
        if floor * floor == self.0 { floor } else { floor + 1 }
    }

    /// Returns whether a note sub-cell layout table exists for this size.
    ///
    /// Only 6, 9, and 12 have meaningful note layouts; every other size maps
    /// all candidates to slot (0, 0).
    #[must_use]
    pub const fn has_note_layout(self) -> bool {
        matches!(self.0, 6 | 9 | 12)
    }

    /// Returns whether `value` encodes a symbol of this grid (1..=n).
    #[must_use]
    pub const fn contains_value(self, value: u8) -> bool {
        value >= 1 && value <= self.0
    }

    /// Iterates over all positions of the grid in row-major order.
    pub fn positions(self) -> impl Iterator<Item = CellPos> {
        let n = self.0;
        (0..n).flat_map(move |row| (0..n).map(move |col| CellPos::new(row, col)))
    }
}

const fn isqrt_floor(n: u8) -> u8 {
    let mut r = 0;
    while (r + 1) * (r + 1) <= n {
        r += 1;
    }
    r
}

impl Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{n}x{n}", n = self.0)
    }
}
