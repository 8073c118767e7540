//! Geometry derivation: cell size, note subdivisions, separator cadence.
//!
//! All derived parameters are computed together in [`BoardGeometry::new`] and
//! the struct is immutable afterwards, so a cell size from one grid size can
//! never be combined with a separator cadence from another. Hosts construct a
//! fresh value whenever the grid size or the available width changes.

use polyku_core::{CellPos, GridSize};

use crate::geom::{Point, Rect};

/// Pixel geometry of a square board, derived from grid size and layout width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    size: GridSize,
    width: f32,
    cell_size: f32,
    note_col_div: f32,
    note_row_div: f32,
}

impl BoardGeometry {
    /// Derives the geometry for a grid of `size` drawn into a square of
    /// `width` pixels.
    #[must_use]
    pub fn new(size: GridSize, width: f32) -> Self {
        let n = f32::from(size.get());
        let cell_size = width / n;
        let geometry = Self {
            size,
            width,
            cell_size,
            note_col_div: cell_size / f32::from(size.block_cols()),
            note_row_div: cell_size / f32::from(size.block_rows()),
        };
        log::trace!("derived geometry for {size} at width {width}: {geometry:?}");
        geometry
    }

    /// The grid size this geometry was derived for.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// The available square drawing width in pixels.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Side length of one cell in pixels.
    #[must_use]
    pub const fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Width of one note sub-column (`cell_size / ceil(sqrt(n))`).
    #[must_use]
    pub const fn note_col_div(&self) -> f32 {
        self.note_col_div
    }

    /// Height of one note sub-row (`cell_size / floor(sqrt(n))`).
    #[must_use]
    pub const fn note_row_div(&self) -> f32 {
        self.note_row_div
    }

    /// Returns whether the vertical separator after column `i` is thick.
    ///
    /// Vertical lines bound block columns, so they repeat every
    /// `block_cols` cells.
    #[must_use]
    pub const fn is_thick_vertical(&self, i: u8) -> bool {
        i % self.size.block_cols() == 0
    }

    /// Returns whether the horizontal separator after row `i` is thick.
    ///
    /// Horizontal lines bound block rows, so they repeat every
    /// `block_rows` cells.
    #[must_use]
    pub const fn is_thick_horizontal(&self, i: u8) -> bool {
        i % self.size.block_rows() == 0
    }

    /// Returns the drawn rectangle of a cell.
    #[must_use]
    pub fn cell_rect(&self, pos: CellPos) -> Rect {
        Rect::new(
            f32::from(pos.col) * self.cell_size,
            f32::from(pos.row) * self.cell_size,
            self.cell_size,
            self.cell_size,
        )
    }

    /// Resolves a point in board space to the cell containing it.
    ///
    /// Returns `None` for points outside the grid.
    #[must_use]
    pub fn cell_at(&self, point: Point) -> Option<CellPos> {
        if point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let col = (point.x / self.cell_size).floor();
        let row = (point.y / self.cell_size).floor();
        let n = f32::from(self.size.get());
        if col >= n || row >= n {
            return None;
        }
        // Both coordinates are non-negative and below n <= 15 here.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (row, col) = (row as u8, col as u8);
        Some(CellPos::new(row, col))
    }

    /// Iterates over the internal separator lines of both axes.
    ///
    /// Yields the `n - 1` vertical separators followed by the `n - 1`
    /// horizontal ones, in index order.
    pub fn separators(&self) -> impl Iterator<Item = Separator> + '_ {
        let n = self.size.get();
        let vertical = (1..n).map(move |i| Separator {
            axis: Axis::Vertical,
            index: i,
            offset: f32::from(i) * self.cell_size,
            thick: self.is_thick_vertical(i),
        });
        let horizontal = (1..n).map(move |i| Separator {
            axis: Axis::Horizontal,
            index: i,
            offset: f32::from(i) * self.cell_size,
            thick: self.is_thick_horizontal(i),
        });
        vertical.chain(horizontal)
    }
}

/// Orientation of a separator line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// A line of constant x, separating columns.
    Vertical,
    /// A line of constant y, separating rows.
    Horizontal,
}

/// One internal grid line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Separator {
    /// Orientation of the line.
    pub axis: Axis,
    /// The column/row index the line follows (1..n).
    pub index: u8,
    /// Pixel offset of the line along its perpendicular axis.
    pub offset: f32,
    /// Whether this line marks a block boundary.
    pub thick: bool,
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_cell_size_divides_width() {
        let geometry = BoardGeometry::new(GridSize::NINE, 540.0);
        assert!((geometry.cell_size() - 60.0).abs() < f32::EPSILON);
        assert!((geometry.note_col_div() - 20.0).abs() < f32::EPSILON);
        assert!((geometry.note_row_div() - 20.0).abs() < f32::EPSILON);

        let geometry = BoardGeometry::new(GridSize::TWELVE, 480.0);
        assert!((geometry.cell_size() - 40.0).abs() < f32::EPSILON);
        // 12 -> 3x4 blocks: 4 note columns, 3 note rows
        assert!((geometry.note_col_div() - 10.0).abs() < f32::EPSILON);
        assert!((geometry.note_row_div() - 40.0 / 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_thick_cadence_matches_blocks() {
        let g6 = BoardGeometry::new(GridSize::SIX, 600.0);
        let thick_v: Vec<u8> = (1..6).filter(|&i| g6.is_thick_vertical(i)).collect();
        let thick_h: Vec<u8> = (1..6).filter(|&i| g6.is_thick_horizontal(i)).collect();
        assert_eq!(thick_v, vec![3]);
        assert_eq!(thick_h, vec![2, 4]);

        let g12 = BoardGeometry::new(GridSize::TWELVE, 600.0);
        let thick_v: Vec<u8> = (1..12).filter(|&i| g12.is_thick_vertical(i)).collect();
        let thick_h: Vec<u8> = (1..12).filter(|&i| g12.is_thick_horizontal(i)).collect();
        assert_eq!(thick_v, vec![4, 8]);
        assert_eq!(thick_h, vec![3, 6, 9]);
    }

    #[test]
    fn test_cell_rect_and_cell_at_are_inverse_at_centers() {
        for size in [GridSize::SIX, GridSize::NINE, GridSize::TWELVE] {
            let geometry = BoardGeometry::new(size, 540.0);
            for pos in size.positions() {
                let center = geometry.cell_rect(pos).center();
                assert_eq!(geometry.cell_at(center), Some(pos), "{size} {pos}");
            }
        }
    }

    #[test]
    fn test_cell_at_rejects_outside_points() {
        let geometry = BoardGeometry::new(GridSize::NINE, 540.0);
        assert_eq!(geometry.cell_at(Point::new(-1.0, 10.0)), None);
        assert_eq!(geometry.cell_at(Point::new(10.0, -1.0)), None);
        assert_eq!(geometry.cell_at(Point::new(540.0, 10.0)), None);
        assert_eq!(geometry.cell_at(Point::new(10.0, 600.0)), None);
        assert_eq!(
            geometry.cell_at(Point::new(0.0, 0.0)),
            Some(CellPos::new(0, 0))
        );
    }

    proptest! {
        // Separator positions tile [0, n * cell]: position i sits exactly i
        // cells in, and thick lines are exactly the block-cadence multiples.
        #[test]
        fn prop_separators_span_board(
            n in prop_oneof![Just(6u8), Just(9), Just(12)],
            width in 60.0f32..2000.0,
        ) {
            let size = GridSize::new(n).unwrap();
            let geometry = BoardGeometry::new(size, width);
            let cell = geometry.cell_size();

            let vertical: Vec<Separator> = geometry
                .separators()
                .filter(|s| s.axis == Axis::Vertical)
                .collect();
            let horizontal: Vec<Separator> = geometry
                .separators()
                .filter(|s| s.axis == Axis::Horizontal)
                .collect();
            prop_assert_eq!(vertical.len(), usize::from(n) - 1);
            prop_assert_eq!(horizontal.len(), usize::from(n) - 1);

            for s in vertical {
                prop_assert!((s.offset - f32::from(s.index) * cell).abs() < 1e-3);
                prop_assert!(s.offset > 0.0 && s.offset < f32::from(n) * cell + 1e-3);
                prop_assert_eq!(s.thick, s.index % size.block_cols() == 0);
            }
            for s in horizontal {
                prop_assert!((s.offset - f32::from(s.index) * cell).abs() < 1e-3);
                prop_assert_eq!(s.thick, s.index % size.block_rows() == 0);
            }
        }

        // Resolving the drawn center of any cell yields that cell.
        #[test]
        fn prop_cell_center_resolves_to_cell(
            n in prop_oneof![Just(6u8), Just(9), Just(12)],
            width in 100.0f32..2000.0,
            row in 0u8..12,
            col in 0u8..12,
        ) {
            let size = GridSize::new(n).unwrap();
            prop_assume!(row < n && col < n);
            let geometry = BoardGeometry::new(size, width);
            let pos = CellPos::new(row, col);
            let center = geometry.cell_rect(pos).center();
            prop_assert_eq!(geometry.cell_at(center), Some(pos));
        }
    }
}
