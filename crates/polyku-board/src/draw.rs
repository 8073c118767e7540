//! The immediate-mode drawing pipeline.
//!
//! [`render`] is a pure function from a validated snapshot to an ordered list
//! of drawing commands; later commands occlude earlier ones. Hosts replay the
//! list onto their surface each frame and discard it.

use crate::{
    geom::{Point, Rect},
    geometry::{Axis, BoardGeometry},
    notes::note_slot,
    paint::BoardPaints,
    palette::{BoardPalette, Rgba},
    view::{BoardFlags, BoardView},
};

/// Alpha applied to the selected-cell fill and identical-value fills.
pub const CELL_HIGHLIGHT_ALPHA: f32 = 0.3;
/// Alpha applied to the row/column position-line bands.
pub const POSITION_LINE_ALPHA: f32 = 0.1;
/// Alpha applied to externally requested highlight fills.
pub const EXTERNAL_HIGHLIGHT_ALPHA: f32 = 0.5;
/// Alpha of the outer frame and thick separators.
pub const THICK_LINE_ALPHA: f32 = 0.8;
/// Alpha of thin separators.
pub const THIN_LINE_ALPHA: f32 = 0.6;
/// Stroke width of the outer frame and thick separators.
pub const THICK_STROKE: f32 = 8.0;
/// Stroke width of thin separators.
pub const THIN_STROKE: f32 = 5.0;
/// Corner radius of the outer frame.
pub const FRAME_CORNER_RADIUS: f32 = 15.0;
/// Glyph drawn in place of real values in questions mode.
pub const QUESTION_GLYPH: char = '?';

/// One drawing command, in board pixel space.
///
/// Glyph positions are the *baseline left* of the drawn text (text draws
/// from its baseline, not its top-left); hosts with a different text anchor
/// convert when replaying.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCmd {
    /// Fill a rectangle.
    FillRect {
        /// Area to fill.
        rect: Rect,
        /// Fill color.
        color: Rgba,
    },
    /// Stroke a rounded rectangle outline.
    StrokeRoundRect {
        /// Outline area.
        rect: Rect,
        /// Corner radius in pixels.
        corner_radius: f32,
        /// Stroke width in pixels.
        stroke_width: f32,
        /// Stroke color.
        color: Rgba,
    },
    /// Draw a straight line segment.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Stroke width in pixels.
        width: f32,
        /// Stroke color.
        color: Rgba,
    },
    /// Draw a single glyph anchored at its baseline left.
    Glyph {
        /// Baseline-left position.
        baseline: Point,
        /// The character to draw.
        glyph: char,
        /// Font pixel size.
        font_px: f32,
        /// Text color.
        color: Rgba,
    },
}

/// Renders one frame of the board into drawing commands.
///
/// Command order follows the layering contract: highlights first, then the
/// frame and separators, then value glyphs, then note glyphs.
#[must_use]
pub fn render(
    view: &BoardView<'_>,
    geometry: &BoardGeometry,
    paints: &BoardPaints,
    palette: &BoardPalette,
) -> Vec<DrawCmd> {
    let mut commands = Vec::new();
    push_selection_highlights(&mut commands, view, geometry, palette);
    push_identical_highlights(&mut commands, view, geometry, palette);
    push_external_highlights(&mut commands, view, geometry, palette);
    push_frame(&mut commands, geometry, palette);
    push_separators(&mut commands, geometry, palette);
    push_value_glyphs(&mut commands, view, geometry, paints, palette);
    push_note_glyphs(&mut commands, view, geometry, paints, palette);
    commands
}

fn push_selection_highlights(
    commands: &mut Vec<DrawCmd>,
    view: &BoardView<'_>,
    geometry: &BoardGeometry,
    palette: &BoardPalette,
) {
    let Some(selected) = view.selected() else {
        return;
    };
    commands.push(DrawCmd::FillRect {
        rect: geometry.cell_rect(selected),
        color: palette.highlight.with_alpha(CELL_HIGHLIGHT_ALPHA),
    });
    if view.flags().contains(BoardFlags::POSITION_LINES) {
        let cell = geometry.cell_size();
        let width = geometry.width();
        let band = palette.highlight.with_alpha(POSITION_LINE_ALPHA);
        // Full-height column band, then full-width row band.
        commands.push(DrawCmd::FillRect {
            rect: Rect::new(f32::from(selected.col) * cell, 0.0, cell, width),
            color: band,
        });
        commands.push(DrawCmd::FillRect {
            rect: Rect::new(0.0, f32::from(selected.row) * cell, width, cell),
            color: band,
        });
    }
}

fn push_identical_highlights(
    commands: &mut Vec<DrawCmd>,
    view: &BoardView<'_>,
    geometry: &BoardGeometry,
    palette: &BoardPalette,
) {
    if !view.flags().contains(BoardFlags::IDENTICAL_HIGHLIGHT) {
        return;
    }
    // No selection means no comparison value; an empty selected cell matches
    // nothing either, since empty cells are skipped below.
    let selected_value = view.selected().map_or(0, |pos| view.cell(pos).value);
    for cell in view.cells() {
        if cell.value == selected_value && cell.value != 0 {
            commands.push(DrawCmd::FillRect {
                rect: geometry.cell_rect(cell.pos),
                color: palette.highlight.with_alpha(CELL_HIGHLIGHT_ALPHA),
            });
        }
    }
}

fn push_external_highlights(
    commands: &mut Vec<DrawCmd>,
    view: &BoardView<'_>,
    geometry: &BoardGeometry,
    palette: &BoardPalette,
) {
    for &pos in view.highlighted() {
        commands.push(DrawCmd::FillRect {
            rect: geometry.cell_rect(pos),
            color: palette.highlight.with_alpha(EXTERNAL_HIGHLIGHT_ALPHA),
        });
    }
}

fn push_frame(commands: &mut Vec<DrawCmd>, geometry: &BoardGeometry, palette: &BoardPalette) {
    commands.push(DrawCmd::StrokeRoundRect {
        rect: Rect::new(0.0, 0.0, geometry.width(), geometry.width()),
        corner_radius: FRAME_CORNER_RADIUS,
        stroke_width: THICK_STROKE,
        color: palette.foreground.with_alpha(THICK_LINE_ALPHA),
    });
}

fn push_separators(commands: &mut Vec<DrawCmd>, geometry: &BoardGeometry, palette: &BoardPalette) {
    let width = geometry.width();
    for separator in geometry.separators() {
        let (from, to) = match separator.axis {
            Axis::Vertical => (
                Point::new(separator.offset, 0.0),
                Point::new(separator.offset, width),
            ),
            Axis::Horizontal => {
                // Rounding can push the last row's separator past the board
                // edge; skip it rather than paint outside the frame.
                if separator.offset >= width {
                    continue;
                }
                (
                    Point::new(0.0, separator.offset),
                    Point::new(width, separator.offset),
                )
            }
        };
        let (alpha, stroke) = if separator.thick {
            (THICK_LINE_ALPHA, THICK_STROKE)
        } else {
            (THIN_LINE_ALPHA, THIN_STROKE)
        };
        commands.push(DrawCmd::Line {
            from,
            to,
            width: stroke,
            color: palette.foreground.with_alpha(alpha),
        });
    }
}

fn push_value_glyphs(
    commands: &mut Vec<DrawCmd>,
    view: &BoardView<'_>,
    geometry: &BoardGeometry,
    paints: &BoardPaints,
    palette: &BoardPalette,
) {
    let questions = view.flags().contains(BoardFlags::QUESTIONS);
    let error_highlight = view.flags().contains(BoardFlags::ERROR_HIGHLIGHT);
    let cell_size = geometry.cell_size();
    for cell in view.cells() {
        let Some(value_glyph) = cell.glyph() else {
            continue;
        };
        let glyph = if questions { QUESTION_GLYPH } else { value_glyph };
        let color = if cell.error && error_highlight {
            palette.error
        } else if cell.locked {
            palette.locked
        } else {
            palette.foreground
        };
        let rect = geometry.cell_rect(cell.pos);
        // Center horizontally by advance width; anchor the baseline to the
        // cell bottom minus half the leftover vertical space.
        let baseline = Point::new(
            rect.min.x + (cell_size - paints.glyph.width) / 2.0,
            rect.min.y + cell_size - (cell_size - paints.glyph.height) / 2.0,
        );
        commands.push(DrawCmd::Glyph {
            baseline,
            glyph,
            font_px: paints.main_px,
            color,
        });
    }
}

fn push_note_glyphs(
    commands: &mut Vec<DrawCmd>,
    view: &BoardView<'_>,
    geometry: &BoardGeometry,
    paints: &BoardPaints,
    palette: &BoardPalette,
) {
    let flags = view.flags();
    if view.notes().is_empty()
        || flags.contains(BoardFlags::QUESTIONS)
        || !flags.contains(BoardFlags::RENDER_NOTES)
    {
        return;
    }
    let col_div = geometry.note_col_div();
    let row_div = geometry.note_row_div();
    for note in view.notes() {
        let Some(glyph) = note.glyph() else {
            continue;
        };
        let slot = note_slot(note.value, view.size());
        let origin = geometry.cell_rect(note.pos).min;
        // Center within the sub-cell slot; the vertical term adds half the
        // glyph height because the position is a text baseline.
        let baseline = Point::new(
            origin.x + col_div / 2.0 + col_div * f32::from(slot.col) - paints.note_glyph.width / 2.0,
            origin.y + row_div / 2.0 + row_div * f32::from(slot.row)
                + paints.note_glyph.height / 2.0,
        );
        commands.push(DrawCmd::Glyph {
            baseline,
            glyph,
            font_px: paints.note_px,
            color: palette.foreground,
        });
    }
}

#[cfg(test)]
mod tests {
    use polyku_core::{Cell, CellPos, GridSize, Note};

    use super::*;
    use crate::paint::{FontSizes, HeuristicTextMetrics};

    const WIDTH: f32 = 540.0;

    struct Fixture {
        size: GridSize,
        cells: Vec<Cell>,
        notes: Vec<Note>,
        highlighted: Vec<CellPos>,
    }

    impl Fixture {
        fn new(size: GridSize) -> Self {
            Self {
                size,
                cells: size.positions().map(Cell::empty).collect(),
                notes: Vec::new(),
                highlighted: Vec::new(),
            }
        }

        fn set(&mut self, pos: CellPos, value: u8) -> &mut Cell {
            let n = usize::from(self.size.get());
            let cell = &mut self.cells[usize::from(pos.row) * n + usize::from(pos.col)];
            cell.value = value;
            cell
        }

        fn render(&self, selected: Option<CellPos>, flags: BoardFlags) -> Vec<DrawCmd> {
            let view = BoardView::with_flags(
                self.size,
                &self.cells,
                &self.notes,
                selected,
                &self.highlighted,
                flags,
            )
            .unwrap();
            let geometry = BoardGeometry::new(self.size, WIDTH);
            let paints =
                BoardPaints::new(FontSizes::defaults_for(self.size), 1.0, &HeuristicTextMetrics);
            render(&view, &geometry, &paints, &BoardPalette::default())
        }
    }

    fn fill_rects(commands: &[DrawCmd]) -> Vec<Rect> {
        commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::FillRect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    fn glyphs(commands: &[DrawCmd]) -> Vec<char> {
        commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Glyph { glyph, .. } => Some(*glyph),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_no_selection_draws_no_identical_highlights() {
        let mut fixture = Fixture::new(GridSize::NINE);
        fixture.set(CellPos::new(2, 3), 5);
        fixture.set(CellPos::new(4, 4), 5);

        let commands = fixture.render(None, BoardFlags::default());
        assert!(fill_rects(&commands).is_empty());
        assert_eq!(glyphs(&commands), vec!['5', '5']);
    }

    #[test]
    fn test_identical_highlights_cover_matching_cells() {
        let mut fixture = Fixture::new(GridSize::NINE);
        fixture.set(CellPos::new(2, 3), 5);
        fixture.set(CellPos::new(4, 4), 5);
        fixture.set(CellPos::new(0, 0), 1);

        let selected = CellPos::new(2, 3);
        let commands = fixture.render(
            Some(selected),
            BoardFlags::IDENTICAL_HIGHLIGHT | BoardFlags::ERROR_HIGHLIGHT,
        );
        let geometry = BoardGeometry::new(GridSize::NINE, WIDTH);
        let rects = fill_rects(&commands);
        // Selection fill plus one identical-value fill per 5-valued cell,
        // including the selected cell itself.
        assert_eq!(rects.len(), 3);
        assert_eq!(rects[0], geometry.cell_rect(selected));
        assert_eq!(rects[1], geometry.cell_rect(CellPos::new(2, 3)));
        assert_eq!(rects[2], geometry.cell_rect(CellPos::new(4, 4)));
    }

    #[test]
    fn test_empty_selected_cell_matches_nothing() {
        let mut fixture = Fixture::new(GridSize::NINE);
        fixture.set(CellPos::new(4, 4), 5);

        let commands = fixture.render(
            Some(CellPos::new(0, 0)),
            BoardFlags::IDENTICAL_HIGHLIGHT,
        );
        // Only the selection fill; the empty selected cell matches no value.
        assert_eq!(fill_rects(&commands).len(), 1);
    }

    #[test]
    fn test_position_lines_add_two_bands() {
        let fixture = Fixture::new(GridSize::NINE);
        let selected = CellPos::new(2, 3);
        let commands = fixture.render(Some(selected), BoardFlags::POSITION_LINES);
        let rects = fill_rects(&commands);
        assert_eq!(rects.len(), 3);
        let cell = WIDTH / 9.0;
        assert_eq!(rects[1], Rect::new(3.0 * cell, 0.0, cell, WIDTH));
        assert_eq!(rects[2], Rect::new(0.0, 2.0 * cell, WIDTH, cell));
    }

    #[test]
    fn test_external_highlights_are_independent_of_selection() {
        let mut fixture = Fixture::new(GridSize::NINE);
        fixture.highlighted = vec![CellPos::new(1, 1), CellPos::new(8, 8)];
        let commands = fixture.render(None, BoardFlags::empty());
        assert_eq!(fill_rects(&commands).len(), 2);
    }

    #[test]
    fn test_questions_mode_masks_every_value() {
        let mut fixture = Fixture::new(GridSize::NINE);
        fixture.set(CellPos::new(0, 0), 3).locked = true;
        fixture.set(CellPos::new(1, 1), 7).error = true;
        fixture.set(CellPos::new(2, 2), 9);
        fixture.notes.push(Note::new(CellPos::new(5, 5), 4));

        let commands = fixture.render(
            None,
            BoardFlags::QUESTIONS | BoardFlags::ERROR_HIGHLIGHT | BoardFlags::RENDER_NOTES,
        );
        // Every filled cell renders the placeholder; notes are suppressed.
        assert_eq!(glyphs(&commands), vec!['?', '?', '?']);
    }

    #[test]
    fn test_glyph_color_priority() {
        let mut fixture = Fixture::new(GridSize::NINE);
        {
            let cell = fixture.set(CellPos::new(0, 0), 3);
            cell.locked = true;
            cell.error = true;
        }
        let palette = BoardPalette::default();

        // Error beats locked when error highlighting is on.
        let commands = fixture.render(None, BoardFlags::ERROR_HIGHLIGHT);
        let Some(DrawCmd::Glyph { color, .. }) = commands.last() else {
            panic!("expected a glyph command");
        };
        assert_eq!(*color, palette.error);

        // With error highlighting off, the locked color wins.
        let commands = fixture.render(None, BoardFlags::empty());
        let Some(DrawCmd::Glyph { color, .. }) = commands.last() else {
            panic!("expected a glyph command");
        };
        assert_eq!(*color, palette.locked);
    }

    #[test]
    fn test_values_above_nine_render_as_letters() {
        let mut fixture = Fixture::new(GridSize::TWELVE);
        fixture.set(CellPos::new(0, 0), 10);
        fixture.set(CellPos::new(0, 1), 12);
        let commands = fixture.render(None, BoardFlags::empty());
        assert_eq!(glyphs(&commands), vec!['A', 'C']);
    }

    #[test]
    fn test_notes_respect_render_flag() {
        let mut fixture = Fixture::new(GridSize::NINE);
        fixture.notes.push(Note::new(CellPos::new(2, 3), 1));
        fixture.notes.push(Note::new(CellPos::new(2, 3), 5));

        let with_notes = fixture.render(None, BoardFlags::RENDER_NOTES);
        assert_eq!(glyphs(&with_notes), vec!['1', '5']);

        let without = fixture.render(None, BoardFlags::empty());
        assert!(glyphs(&without).is_empty());
    }

    #[test]
    fn test_note_glyphs_land_in_their_slot() {
        let mut fixture = Fixture::new(GridSize::NINE);
        fixture.notes.push(Note::new(CellPos::new(0, 0), 5));
        let commands = fixture.render(None, BoardFlags::RENDER_NOTES);
        let Some(DrawCmd::Glyph { baseline, .. }) = commands.last() else {
            panic!("expected a glyph command");
        };
        // Candidate 5 centers in the middle slot of the cell at the origin.
        let div = WIDTH / 9.0 / 3.0;
        let slot_center_x = div / 2.0 + div;
        let slot_center_y = div / 2.0 + div;
        assert!(baseline.x < slot_center_x && baseline.x > div);
        assert!(baseline.y > slot_center_y && baseline.y < 2.0 * div);
    }

    #[test]
    fn test_frame_and_separator_counts() {
        let fixture = Fixture::new(GridSize::NINE);
        let commands = fixture.render(None, BoardFlags::empty());
        let frames = commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCmd::StrokeRoundRect { .. }))
            .count();
        let lines = commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCmd::Line { .. }))
            .count();
        assert_eq!(frames, 1);
        assert_eq!(lines, 16); // 8 vertical + 8 horizontal
    }
}
