//! Candidate-note placement within a cell.
//!
//! Each cell is subdivided into a small sub-grid for note glyphs:
//! `ceil(sqrt(n))` columns by `floor(sqrt(n))` rows. The mapping from
//! candidate value to sub-cell is a fixed table per grid size, mirroring the
//! classic layout where candidates 1..3 occupy the top row of a 9x9 cell.

use polyku_core::GridSize;

/// A sub-cell slot within a cell, addressed as (column, row).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteSlot {
    /// Sub-column index (0-based, along the x axis).
    pub col: u8,
    /// Sub-row index (0-based, along the y axis).
    pub row: u8,
}

/// Returns the sub-cell slot for a candidate value.
///
/// Sizes 6 and 9 use a 3x3 arrangement; size 12 uses 4 columns by 3 rows.
/// Values outside the table for a size, and all other sizes, map to slot
/// (0, 0) — callers must not rely on meaningful note layout there.
///
/// # Examples
///
/// ```
/// use polyku_board::{NoteSlot, note_slot};
/// use polyku_core::GridSize;
///
/// // 9x9: candidate 5 sits in the middle of the cell
/// assert_eq!(note_slot(5, GridSize::NINE), NoteSlot { col: 1, row: 1 });
/// // 12x12: candidate 12 sits bottom-right of the 4x3 arrangement
/// assert_eq!(note_slot(12, GridSize::TWELVE), NoteSlot { col: 3, row: 2 });
/// ```
#[must_use]
pub fn note_slot(value: u8, size: GridSize) -> NoteSlot {
    let col = slot_col(value, size);
    let row = slot_row(value, size);
    NoteSlot { col, row }
}

fn slot_col(value: u8, size: GridSize) -> u8 {
    match size {
        GridSize::SIX | GridSize::NINE => match value {
            1 | 4 | 7 => 0,
            2 | 5 | 8 => 1,
            3 | 6 | 9 => 2,
            _ => 0,
        },
        GridSize::TWELVE => match value {
            1 | 5 | 9 => 0,
            2 | 6 | 10 => 1,
            3 | 7 | 11 => 2,
            4 | 8 | 12 => 3,
            _ => 0,
        },
        _ => 0,
    }
}

fn slot_row(value: u8, size: GridSize) -> u8 {
    match size {
        GridSize::SIX | GridSize::NINE => match value {
            1..=3 => 0,
            4..=6 => 1,
            7..=9 => 2,
            _ => 0,
        },
        GridSize::TWELVE => match value {
            1..=4 => 0,
            5..=8 => 1,
            9..=12 => 2,
            _ => 0,
        },
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_nine_layout_reads_left_to_right_top_to_bottom() {
        for value in 1..=9u8 {
            let slot = note_slot(value, GridSize::NINE);
            assert_eq!(slot.col, (value - 1) % 3, "value {value}");
            assert_eq!(slot.row, (value - 1) / 3, "value {value}");
        }
    }

    #[test]
    fn test_twelve_layout_uses_four_columns() {
        for value in 1..=12u8 {
            let slot = note_slot(value, GridSize::TWELVE);
            assert_eq!(slot.col, (value - 1) % 4, "value {value}");
            assert_eq!(slot.row, (value - 1) / 4, "value {value}");
        }
    }

    #[test]
    fn test_six_shares_the_nine_table() {
        for value in 1..=6u8 {
            assert_eq!(note_slot(value, GridSize::SIX), note_slot(value, GridSize::NINE));
        }
    }

    proptest! {
        // The slot always fits the sub-grid of its size, and the lookup is a
        // pure function of its inputs.
        #[test]
        fn prop_slot_within_subgrid(
            n in prop_oneof![Just(6u8), Just(9), Just(12)],
            value in 1u8..=12,
        ) {
            let size = GridSize::new(n).unwrap();
            prop_assume!(value <= n);
            let slot = note_slot(value, size);
            prop_assert!(slot.col < size.block_cols());
            prop_assert!(slot.row < size.block_rows());
            prop_assert_eq!(slot, note_slot(value, size));
        }

        // Unsupported sizes collapse every candidate to (0, 0).
        #[test]
        fn prop_untabled_sizes_default_to_origin(
            n in 1u8..=15,
            value in 0u8..=255,
        ) {
            let size = GridSize::new(n).unwrap();
            prop_assume!(!size.has_note_layout());
            prop_assert_eq!(note_slot(value, size), NoteSlot { col: 0, row: 0 });
        }
    }
}
