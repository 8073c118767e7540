//! Font sizing and glyph metrics.
//!
//! Centering math depends on the measured extents of a representative glyph,
//! so metrics live next to the font sizes and both are recomputed together in
//! [`BoardPaints::new`] whenever the configuration changes. Glyph metrics are
//! never carried over from a previous font size.

/// Text measurement provided by the host's text engine.
///
/// The renderer measures a representative glyph (`1`) once per paint set; the
/// measured advance width and bounding-box height feed the centering math of
/// the drawing pipeline.
pub trait TextMetrics {
    /// Measures a single glyph at the given pixel size.
    fn measure(&self, glyph: char, font_px: f32) -> GlyphExtents;
}

/// Measured extents of a glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphExtents {
    /// Advance width in pixels.
    pub width: f32,
    /// Bounding-box height in pixels.
    pub height: f32,
}

/// A deterministic metrics source for hosts without a text engine (and for
/// tests): proportional to the font size, roughly matching a digit glyph in
/// a typical proportional face.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTextMetrics;

impl TextMetrics for HeuristicTextMetrics {
    fn measure(&self, _glyph: char, font_px: f32) -> GlyphExtents {
        GlyphExtents {
            width: font_px * 0.5,
            height: font_px * 0.72,
        }
    }
}

/// Font sizes for main digits and notes, in scale-independent points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizes {
    /// Point size of value glyphs.
    pub main_pt: f32,
    /// Point size of note glyphs.
    pub note_pt: f32,
}

impl FontSizes {
    /// Returns the built-in defaults for a grid size.
    ///
    /// Larger grids get smaller type: 6 -> 32/18, 9 -> 26/12, 12 -> 24/7;
    /// any other size falls back to 14/14.
    #[must_use]
    pub fn defaults_for(size: polyku_core::GridSize) -> Self {
        let (main_pt, note_pt) = match size.get() {
            6 => (32.0, 18.0),
            9 => (26.0, 12.0),
            12 => (24.0, 7.0),
            _ => (14.0, 14.0),
        };
        Self { main_pt, note_pt }
    }
}

/// Pixel font sizes plus the glyph metrics measured at those sizes.
///
/// Constructed as a unit so the metrics always correspond to the sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardPaints {
    /// Pixel size of value glyphs.
    pub main_px: f32,
    /// Pixel size of note glyphs.
    pub note_px: f32,
    /// Extents of the representative value glyph at `main_px`.
    pub glyph: GlyphExtents,
    /// Extents of the representative note glyph at `note_px`.
    pub note_glyph: GlyphExtents,
}

/// The glyph measured to derive centering metrics.
pub const REFERENCE_GLYPH: char = '1';

impl BoardPaints {
    /// Scales the font sizes to pixels and measures glyph extents.
    ///
    /// `scale` is the host's point-to-pixel density factor (1.0 on an
    /// unscaled desktop display).
    #[must_use]
    pub fn new(sizes: FontSizes, scale: f32, metrics: &dyn TextMetrics) -> Self {
        let main_px = sizes.main_pt * scale;
        let note_px = sizes.note_pt * scale;
        Self {
            main_px,
            note_px,
            glyph: metrics.measure(REFERENCE_GLYPH, main_px),
            note_glyph: metrics.measure(REFERENCE_GLYPH, note_px),
        }
    }
}

#[cfg(test)]
mod tests {
    use polyku_core::GridSize;

    use super::*;

    #[test]
    fn test_default_font_tables() {
        let six = FontSizes::defaults_for(GridSize::SIX);
        assert_eq!((six.main_pt, six.note_pt), (32.0, 18.0));
        let nine = FontSizes::defaults_for(GridSize::NINE);
        assert_eq!((nine.main_pt, nine.note_pt), (26.0, 12.0));
        let twelve = FontSizes::defaults_for(GridSize::TWELVE);
        assert_eq!((twelve.main_pt, twelve.note_pt), (24.0, 7.0));
        let other = FontSizes::defaults_for(GridSize::new(4).unwrap());
        assert_eq!((other.main_pt, other.note_pt), (14.0, 14.0));
    }

    #[test]
    fn test_paints_scale_and_measure_together() {
        let sizes = FontSizes {
            main_pt: 20.0,
            note_pt: 10.0,
        };
        let paints = BoardPaints::new(sizes, 2.0, &HeuristicTextMetrics);
        assert!((paints.main_px - 40.0).abs() < f32::EPSILON);
        assert!((paints.note_px - 20.0).abs() < f32::EPSILON);
        // Metrics reflect the scaled pixel sizes, not the point sizes.
        assert!((paints.glyph.width - 20.0).abs() < f32::EPSILON);
        assert!((paints.note_glyph.width - 10.0).abs() < f32::EPSILON);
    }
}
