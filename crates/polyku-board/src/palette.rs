//! Color palette for board rendering.
//!
//! The palette is intentionally independent of any UI toolkit's theme types
//! so board-specific semantics (given digits, errors, highlights) can be
//! tuned without being constrained by the host theme. Hosts build one from
//! their own visuals.

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Rgba {
    /// Creates an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Returns the same color with its alpha replaced by `alpha` (0.0..=1.0).
    #[must_use]
    pub fn with_alpha(self, alpha: f32) -> Self {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { a, ..self }
    }
}

/// Colors used by the board renderer.
#[derive(Debug, Clone)]
pub struct BoardPalette {
    /// Grid lines, the frame, and player-entered digits.
    pub foreground: Rgba,
    /// Given (locked) digits.
    pub locked: Rgba,
    /// Digits flagged as rule violations.
    pub error: Rgba,
    /// Base color for selection, position-line, and identical-value fills;
    /// the renderer applies per-use alphas.
    pub highlight: Rgba,
}

impl Default for BoardPalette {
    fn default() -> Self {
        let foreground = Rgba::rgb(225, 225, 230);
        Self {
            foreground,
            locked: foreground.with_alpha(0.75),
            error: Rgba::rgb(230, 67, 83),
            highlight: Rgba::rgb(140, 145, 160),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_alpha_scales_and_clamps() {
        let c = Rgba::rgb(10, 20, 30);
        assert_eq!(c.a, 255);
        assert_eq!(c.with_alpha(0.0).a, 0);
        assert_eq!(c.with_alpha(1.0).a, 255);
        assert_eq!(c.with_alpha(0.5).a, 128);
        assert_eq!(c.with_alpha(2.0).a, 255);
        assert_eq!(c.with_alpha(-1.0).a, 0);
        // Color channels untouched
        let half = c.with_alpha(0.5);
        assert_eq!((half.r, half.g, half.b), (10, 20, 30));
    }
}
